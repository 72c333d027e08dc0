use crate::rule::{Rule, RuleVerdict};
use crate::rules::utils;
use enrollguard_types::{ids, Course, Student};
use serde_json::json;

/// Fails a registration when the course lists prerequisites the student has
/// not completed. Every missing prerequisite is reported, not just the first.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrerequisiteRule;

impl Rule for PrerequisiteRule {
    fn id(&self) -> &'static str {
        ids::RULE_PREREQUISITES
    }

    fn validate(&self, student: &Student, course: &Course) -> RuleVerdict {
        if let Some(issue) = utils::identity_issue(student, course) {
            return RuleVerdict::fail(ids::CODE_MALFORMED_INPUT, issue);
        }

        // BTreeSet difference keeps the missing list sorted and deterministic.
        let missing: Vec<&str> = course
            .prerequisites
            .difference(&student.completed_courses)
            .map(String::as_str)
            .collect();

        if !missing.is_empty() {
            return RuleVerdict::fail_with_data(
                ids::CODE_MISSING_PREREQUISITES,
                format!("missing prerequisites: {}", missing.join(", ")),
                json!({ "missing": missing }),
            );
        }

        RuleVerdict::pass("all prerequisites completed")
    }
}
