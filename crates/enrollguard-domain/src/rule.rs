use enrollguard_types::{Course, Student};
use serde_json::Value as JsonValue;
use thiserror::Error;

/// Invalid rule configuration, surfaced at construction time.
///
/// Thresholds are validated before a rule ever runs: a coordinator never
/// holds a misconfigured rule.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RuleConfigError {
    #[error("max credit load must be at least 1")]
    ZeroCreditLimit,

    #[error("minimum score must be a finite, non-negative number (got {value})")]
    InvalidMinScore { value: f64 },
}

/// What a single rule decided about a (student, course) pair.
///
/// Produced fresh per evaluation; the coordinator turns it into a
/// [`RuleOutcome`](enrollguard_types::RuleOutcome) by attaching the rule's
/// identity and a fingerprint.
#[derive(Clone, Debug)]
pub struct RuleVerdict {
    pub passed: bool,
    /// Failure discriminator; `None` on passed verdicts.
    pub code: Option<&'static str>,
    pub reason: String,
    /// Rule-specific structured payload.
    pub data: JsonValue,
}

impl RuleVerdict {
    pub fn pass(reason: impl Into<String>) -> Self {
        Self {
            passed: true,
            code: None,
            reason: reason.into(),
            data: JsonValue::Null,
        }
    }

    pub fn fail(code: &'static str, reason: impl Into<String>) -> Self {
        Self {
            passed: false,
            code: Some(code),
            reason: reason.into(),
            data: JsonValue::Null,
        }
    }

    pub fn fail_with_data(code: &'static str, reason: impl Into<String>, data: JsonValue) -> Self {
        Self {
            passed: false,
            code: Some(code),
            reason: reason.into(),
            data,
        }
    }
}

/// A unit of registration policy.
///
/// Any type exposing `validate` qualifies; the [`Coordinator`](crate::Coordinator)
/// depends only on this trait and is open to new rules without modification.
///
/// Implementations must be pure: no I/O, no mutation of inputs, and no
/// request-scoped mutable state. The trait requires `Send + Sync` so one
/// coordinator can serve concurrent callers; a rule holds at most the
/// configuration it was constructed with.
pub trait Rule: Send + Sync {
    /// Stable identifier used in reports (see [`enrollguard_types::ids`]).
    fn id(&self) -> &'static str;

    /// Evaluate the pair. Must return the same verdict for the same inputs,
    /// however often and in whatever order the coordinator calls it.
    fn validate(&self, student: &Student, course: &Course) -> RuleVerdict;
}
