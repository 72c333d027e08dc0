use crate::{RenderableReport, RenderableVerdict};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Enrollguard report\n\n");
    let verdict = match report.verdict {
        RenderableVerdict::Pass => "PASS",
        RenderableVerdict::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Student: `{}`\n- Course: `{}`\n- Verdict: **{}**\n- Rules: {} passed / {} failed ({} run)\n\n",
        report.data.student,
        report.data.course,
        verdict,
        report.data.rules_passed,
        report.data.rules_failed,
        report.data.rules_run
    ));

    for note in &report.notes {
        out.push_str(&format!("> Note: {}\n\n", note));
    }

    if report.outcomes.is_empty() {
        out.push_str("No rules were configured; the registration passes vacuously.\n");
        return out;
    }

    out.push_str("## Rule outcomes\n\n");

    for outcome in &report.outcomes {
        let status = if outcome.passed { "PASS" } else { "FAIL" };
        match &outcome.code {
            Some(code) => out.push_str(&format!(
                "- [{}] `{}` / `{}`: {}\n",
                status, outcome.rule_id, code, outcome.reason
            )),
            None => out.push_str(&format!(
                "- [{}] `{}`: {}\n",
                status, outcome.rule_id, outcome.reason
            )),
        }
    }

    out
}
