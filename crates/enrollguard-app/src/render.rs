//! Render and serialization helpers over in-memory reports.

use anyhow::Context;
use camino::Utf8Path;
use enrollguard_render::{RenderableData, RenderableOutcome, RenderableReport, RenderableVerdict};
use enrollguard_types::{ReportEnvelope, Verdict};

/// Convert a report envelope to the render-side model.
pub fn to_renderable(report: &ReportEnvelope) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdict::Pass,
            Verdict::Fail => RenderableVerdict::Fail,
        },
        outcomes: report
            .outcomes
            .iter()
            .map(|o| RenderableOutcome {
                rule_id: o.rule_id.clone(),
                passed: o.passed,
                reason: o.reason.clone(),
                code: o.code.clone(),
            })
            .collect(),
        data: RenderableData {
            student: report.data.student.clone(),
            course: report.data.course.clone(),
            rules_run: report.data.rules_run,
            rules_passed: report.data.rules_passed,
            rules_failed: report.data.rules_failed,
        },
        notes: report.notes.clone(),
    }
}

pub fn render_markdown(report: &ReportEnvelope) -> String {
    enrollguard_render::render_markdown(&to_renderable(report))
}

/// Serialize a report as pretty JSON (trailing newline included).
pub fn serialize_report(report: &ReportEnvelope) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(report).context("serialize report")?;
    json.push('\n');
    Ok(json)
}

/// Parse a previously written report.
pub fn parse_report_json(input: &str) -> anyhow::Result<ReportEnvelope> {
    let report: ReportEnvelope = serde_json::from_str(input).context("parse report JSON")?;
    Ok(report)
}

/// Write text to a path, creating parent directories as needed.
pub fn write_text(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory {parent}"))?;
    }
    std::fs::write(path, text).with_context(|| format!("write {path}"))?;
    Ok(())
}
