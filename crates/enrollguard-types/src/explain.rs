//! Explain registry for rules and outcome codes.
//!
//! Maps rule IDs and codes to human-readable explanations with guidance for
//! the advisor or student on how to resolve a failed check.

use crate::ids;

/// Explanation entry for a rule or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the rule/code.
    pub title: &'static str,
    /// What the rule checks and why it exists.
    pub description: &'static str,
    /// How to resolve a failed outcome.
    pub remediation: &'static str,
}

/// Look up an explanation by rule_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    // Try rule_id first, then code
    match identifier {
        // Rule IDs
        ids::RULE_CREDIT_LOAD | ids::CODE_OVER_CREDIT_LIMIT => Some(explain_credit_load()),
        ids::RULE_PREREQUISITES | ids::CODE_MISSING_PREREQUISITES => Some(explain_prerequisites()),
        ids::RULE_ACADEMIC_STANDING | ids::CODE_BELOW_MIN_SCORE => {
            Some(explain_academic_standing())
        }

        // Shared codes
        ids::CODE_MALFORMED_INPUT => Some(explain_malformed_input()),

        _ => None,
    }
}

/// List all known rule IDs.
pub fn all_rule_ids() -> &'static [&'static str] {
    &[
        ids::RULE_CREDIT_LOAD,
        ids::RULE_PREREQUISITES,
        ids::RULE_ACADEMIC_STANDING,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_OVER_CREDIT_LIMIT,
        ids::CODE_MISSING_PREREQUISITES,
        ids::CODE_BELOW_MIN_SCORE,
        ids::CODE_MALFORMED_INPUT,
    ]
}

fn explain_credit_load() -> Explanation {
    Explanation {
        title: "Credit Load Limit",
        description: "\
Rejects a registration when the student's current credit load plus the
course's credit weight would exceed the configured maximum (default 24).

The limit exists so a student cannot over-enroll in a single term; the
projected load is computed before the registration is committed.",
        remediation: "\
Drop enough currently-enrolled credits to make room for the course, or ask
the registrar whether a higher per-term limit applies to this student.",
    }
}

fn explain_prerequisites() -> Explanation {
    Explanation {
        title: "Prerequisites Completed",
        description: "\
Rejects a registration when the course lists prerequisite courses the
student has not completed. Every missing prerequisite is reported, not just
the first, so one report shows the full gap.",
        remediation: "\
Complete the listed prerequisite courses first, or request a prerequisite
waiver through the course's department.",
    }
}

fn explain_academic_standing() -> Explanation {
    Explanation {
        title: "Academic Standing",
        description: "\
Rejects a registration when the student's cumulative score is below the
configured minimum (default 2.5 on a 0.0-4.0 scale).",
        remediation: "\
The student must raise their cumulative score above the minimum before
registering, or petition for an academic-standing exception.",
    }
}

fn explain_malformed_input() -> Explanation {
    Explanation {
        title: "Malformed Input",
        description: "\
Emitted when a student or course record is not well-formed: an empty
identifier, a zero credit weight, or a non-finite cumulative score. Rules
fail closed on such records so the coordinator always returns a decision
instead of raising a fault.",
        remediation: "\
Fix the student or course record at its source; the registration itself was
never the problem.",
    }
}
