use crate::rule::{Rule, RuleConfigError, RuleVerdict};
use crate::rules::utils;
use enrollguard_types::{ids, Course, Student};
use serde_json::json;

pub const DEFAULT_MIN_SCORE: f64 = 2.5;

/// Fails a registration when the student's cumulative score is below the
/// required minimum.
#[derive(Clone, Copy, Debug)]
pub struct AcademicStandingRule {
    min_score: f64,
}

impl AcademicStandingRule {
    pub fn new(min_score: f64) -> Result<Self, RuleConfigError> {
        if !min_score.is_finite() || min_score < 0.0 {
            return Err(RuleConfigError::InvalidMinScore { value: min_score });
        }
        Ok(Self { min_score })
    }

    pub fn min_score(&self) -> f64 {
        self.min_score
    }
}

impl Default for AcademicStandingRule {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
        }
    }
}

impl Rule for AcademicStandingRule {
    fn id(&self) -> &'static str {
        ids::RULE_ACADEMIC_STANDING
    }

    fn validate(&self, student: &Student, course: &Course) -> RuleVerdict {
        if let Some(issue) = utils::identity_issue(student, course) {
            return RuleVerdict::fail(ids::CODE_MALFORMED_INPUT, issue);
        }

        let score = student.cumulative_score;
        if !score.is_finite() {
            return RuleVerdict::fail(
                ids::CODE_MALFORMED_INPUT,
                format!("cumulative score of '{}' is not a finite number", student.name),
            );
        }

        if score < self.min_score {
            return RuleVerdict::fail_with_data(
                ids::CODE_BELOW_MIN_SCORE,
                format!(
                    "cumulative score {:.2} is below the required minimum {:.2}",
                    score, self.min_score
                ),
                json!({
                    "cumulative_score": score,
                    "min_score": self.min_score,
                }),
            );
        }

        RuleVerdict::pass(format!(
            "cumulative score {:.2} meets the minimum {:.2}",
            score, self.min_score
        ))
    }
}
