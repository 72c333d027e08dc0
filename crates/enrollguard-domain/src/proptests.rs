//! Property-based tests for the evaluation engine.
//!
//! Invariants covered:
//! - the overall verdict is the AND of the per-rule verdicts
//! - an empty rule list is a vacuous pass
//! - evaluation is idempotent
//! - rule order never changes the overall verdict

use crate::coordinator::Coordinator;
use crate::rule::Rule;
use crate::rules::{AcademicStandingRule, CreditLoadRule, PrerequisiteRule};
use enrollguard_types::{Course, Student, Verdict};
use proptest::prelude::*;

/// Buildable description of a rule, so the same configuration can be
/// instantiated more than once (trait objects are not clonable).
#[derive(Clone, Debug)]
enum RuleSpec {
    CreditLoad(u32),
    Prerequisites,
    /// Minimum score in tenths, to keep generated thresholds exact.
    AcademicStanding(u8),
}

impl RuleSpec {
    fn build(&self) -> Box<dyn Rule> {
        match self {
            RuleSpec::CreditLoad(max) => {
                Box::new(CreditLoadRule::new(*max).expect("generated limit is positive"))
            }
            RuleSpec::Prerequisites => Box::new(PrerequisiteRule),
            RuleSpec::AcademicStanding(tenths) => Box::new(
                AcademicStandingRule::new(f64::from(*tenths) / 10.0)
                    .expect("generated minimum is finite and non-negative"),
            ),
        }
    }
}

fn arb_rule_spec() -> impl Strategy<Value = RuleSpec> {
    prop_oneof![
        (1u32..40).prop_map(RuleSpec::CreditLoad),
        Just(RuleSpec::Prerequisites),
        (0u8..40).prop_map(RuleSpec::AcademicStanding),
    ]
}

fn arb_course_code() -> impl Strategy<Value = String> {
    "[A-Z]{2,4}[0-9]{3}"
}

fn arb_student() -> impl Strategy<Value = Student> {
    (
        "[a-z][a-z0-9-]{0,11}",
        prop::collection::btree_set(arb_course_code(), 0..6),
        0u32..30,
        0.0f64..4.0,
    )
        .prop_map(|(name, completed_courses, current_credit_load, cumulative_score)| Student {
            name,
            completed_courses,
            current_credit_load,
            cumulative_score,
        })
}

fn arb_course() -> impl Strategy<Value = Course> {
    (
        arb_course_code(),
        1u32..6,
        prop::collection::btree_set(arb_course_code(), 0..4),
    )
        .prop_map(|(code, credit_weight, prerequisites)| Course {
            code,
            credit_weight,
            prerequisites,
        })
}

proptest! {
    #[test]
    fn overall_verdict_is_the_and_of_outcomes(
        specs in prop::collection::vec(arb_rule_spec(), 0..6),
        s in arb_student(),
        c in arb_course(),
    ) {
        let coordinator = Coordinator::new(specs.iter().map(|spec| spec.build()).collect());
        let report = coordinator.evaluate(&s, &c);

        prop_assert_eq!(report.outcomes.len(), specs.len());
        let expected = if report.outcomes.iter().all(|o| o.passed) {
            Verdict::Pass
        } else {
            Verdict::Fail
        };
        prop_assert_eq!(report.verdict, expected);
    }

    #[test]
    fn empty_rule_list_always_passes(s in arb_student(), c in arb_course()) {
        let coordinator = Coordinator::new(Vec::new());
        prop_assert_eq!(coordinator.evaluate(&s, &c).verdict, Verdict::Pass);
    }

    #[test]
    fn evaluation_is_idempotent(
        specs in prop::collection::vec(arb_rule_spec(), 0..6),
        s in arb_student(),
        c in arb_course(),
    ) {
        let coordinator = Coordinator::new(specs.iter().map(|spec| spec.build()).collect());
        let first = coordinator.evaluate(&s, &c);
        let second = coordinator.evaluate(&s, &c);

        prop_assert_eq!(first.verdict, second.verdict);
        prop_assert_eq!(first.outcomes, second.outcomes);
    }

    #[test]
    fn rule_order_never_changes_the_verdict(
        specs in prop::collection::vec(arb_rule_spec(), 0..6),
        s in arb_student(),
        c in arb_course(),
    ) {
        let forward = Coordinator::new(specs.iter().map(|spec| spec.build()).collect());
        let reversed = Coordinator::new(specs.iter().rev().map(|spec| spec.build()).collect());

        prop_assert_eq!(
            forward.evaluate(&s, &c).verdict,
            reversed.evaluate(&s, &c).verdict
        );
    }
}
