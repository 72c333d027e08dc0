use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use time::OffsetDateTime;

/// Stable schema identifier for enrollguard reports.
pub const SCHEMA_REPORT_V1: &str = "enrollguard.report.v1";

/// Overall registration decision. Intentionally two-valued: a registration is
/// either accepted or rejected, there is no partial outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

/// The outcome of a single rule evaluation, in injection order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RuleOutcome {
    pub rule_id: String,
    pub passed: bool,
    pub reason: String,

    /// Failure discriminator (snake_case); absent on passed outcomes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Stable identifier intended for dedup and trending. A hash of:
    /// `rule_id + code + student identifier + course identifier`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,

    /// Rule-specific structured payload (kept open-ended for forward compatibility).
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: JsonValue,
}

/// Per-verdict tallies across one evaluation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OutcomeCounts {
    pub passed: u32,
    pub failed: u32,
}

impl OutcomeCounts {
    pub fn from_outcomes(outcomes: &[RuleOutcome]) -> Self {
        let mut counts = OutcomeCounts::default();
        for outcome in outcomes {
            if outcome.passed {
                counts.passed += 1;
            } else {
                counts.failed += 1;
            }
        }
        counts
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Summary block embedded in the report envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EligibilityData {
    pub student: String,
    pub course: String,
    pub rules_run: u32,
    pub rules_passed: u32,
    pub rules_failed: u32,
}

/// The emitted report: a stable outer shape around one evaluation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub outcomes: Vec<RuleOutcome>,
    pub data: EligibilityData,

    /// Operational notes (e.g. a notification sink failure). Never affect
    /// the verdict.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}
