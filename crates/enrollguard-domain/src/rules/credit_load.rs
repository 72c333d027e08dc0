use crate::rule::{Rule, RuleConfigError, RuleVerdict};
use crate::rules::utils;
use enrollguard_types::{ids, Course, Student};
use serde_json::json;

pub const DEFAULT_MAX_CREDIT_LOAD: u32 = 24;

/// Fails a registration that would push the student past the per-term
/// credit limit.
#[derive(Clone, Copy, Debug)]
pub struct CreditLoadRule {
    max_credit_load: u32,
}

impl CreditLoadRule {
    pub fn new(max_credit_load: u32) -> Result<Self, RuleConfigError> {
        if max_credit_load == 0 {
            return Err(RuleConfigError::ZeroCreditLimit);
        }
        Ok(Self { max_credit_load })
    }

    pub fn max_credit_load(&self) -> u32 {
        self.max_credit_load
    }
}

impl Default for CreditLoadRule {
    fn default() -> Self {
        Self {
            max_credit_load: DEFAULT_MAX_CREDIT_LOAD,
        }
    }
}

impl Rule for CreditLoadRule {
    fn id(&self) -> &'static str {
        ids::RULE_CREDIT_LOAD
    }

    fn validate(&self, student: &Student, course: &Course) -> RuleVerdict {
        if let Some(issue) = utils::identity_issue(student, course) {
            return RuleVerdict::fail(ids::CODE_MALFORMED_INPUT, issue);
        }
        if course.credit_weight == 0 {
            return RuleVerdict::fail(
                ids::CODE_MALFORMED_INPUT,
                format!("course '{}' has a zero credit weight", course.code),
            );
        }

        // Saturating: a corrupt record must not wrap into a passing load.
        let projected = student
            .current_credit_load
            .saturating_add(course.credit_weight);

        if projected > self.max_credit_load {
            return RuleVerdict::fail_with_data(
                ids::CODE_OVER_CREDIT_LIMIT,
                format!(
                    "projected credit load {} exceeds the limit of {}",
                    projected, self.max_credit_load
                ),
                json!({
                    "projected": projected,
                    "max_credit_load": self.max_credit_load,
                }),
            );
        }

        RuleVerdict::pass(format!(
            "projected credit load {} within the limit of {}",
            projected, self.max_credit_load
        ))
    }
}
