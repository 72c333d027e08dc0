//! The `check` use case: evaluate eligibility and produce a report.

use anyhow::Context;
use enrollguard_domain::notify::NotificationSink;
use enrollguard_domain::Coordinator;
use enrollguard_settings::{Overrides, ResolvedRules, ResolvedSummary};
use enrollguard_types::{
    Course, EligibilityData, ReportEnvelope, Student, ToolMeta, Verdict, SCHEMA_REPORT_V1,
};
use time::OffsetDateTime;

/// Input for the check use case.
pub struct CheckInput<'a> {
    /// Student record JSON.
    pub student_json: &'a str,
    /// Course record JSON.
    pub course_json: &'a str,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Sink told about successful registrations, if any.
    pub notifier: Option<Box<dyn NotificationSink>>,
}

/// Output from the check use case.
#[derive(Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: ReportEnvelope,
    /// The thresholds and rule set that were in effect.
    pub resolved: ResolvedSummary,
}

/// Run the check use case: parse records and config, build the rule list,
/// evaluate, produce a timestamped report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    let student: Student =
        serde_json::from_str(input.student_json).context("parse student record")?;
    let course: Course = serde_json::from_str(input.course_json).context("parse course record")?;

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        enrollguard_settings::EnrollConfigV1::default()
    } else {
        enrollguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let ResolvedRules { rules, summary } =
        enrollguard_settings::resolve_rules(&cfg, input.overrides).context("resolve rules")?;

    let mut coordinator = Coordinator::new(rules);
    if let Some(notifier) = input.notifier {
        coordinator = coordinator.with_notifier(notifier);
    }

    let domain_report = coordinator.evaluate(&student, &course);
    let finished_at = OffsetDateTime::now_utc();

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "enrollguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict: domain_report.verdict,
        data: EligibilityData {
            student: student.name.clone(),
            course: course.code.clone(),
            rules_run: domain_report.outcomes.len() as u32,
            rules_passed: domain_report.counts.passed,
            rules_failed: domain_report.counts.failed,
        },
        outcomes: domain_report.outcomes,
        notes: domain_report.notes,
    };

    Ok(CheckOutput {
        report,
        resolved: summary,
    })
}

/// Map verdict to exit code: 0 = pass, 2 = fail. Exit code 1 is reserved
/// for runtime errors.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 2,
    }
}
