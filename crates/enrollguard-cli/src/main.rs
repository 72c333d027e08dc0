//! CLI entry point for enrollguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and
//! exit codes. All business logic lives in the `enrollguard-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use enrollguard_app::{
    format_explanation, format_not_found, parse_report_json, render_markdown, run_check,
    run_explain, serialize_report, stderr_notifier, verdict_exit_code, write_text, CheckInput,
    ExplainOutput,
};
use enrollguard_settings::Overrides;
use enrollguard_types::Verdict;

#[derive(Parser, Debug)]
#[command(
    name = "enrollguard",
    version,
    about = "Rule-based course registration eligibility checker"
)]
struct Cli {
    /// Path to enrollguard config TOML.
    #[arg(long, default_value = "enrollguard.toml")]
    config: Utf8PathBuf,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a registration and write the JSON report.
    Check {
        /// Path to the student record (JSON).
        #[arg(long)]
        student: Utf8PathBuf,

        /// Path to the course record (JSON).
        #[arg(long)]
        course: Utf8PathBuf,

        /// Override the per-term credit limit.
        #[arg(long)]
        max_credit_load: Option<u32>,

        /// Override the minimum cumulative score.
        #[arg(long)]
        min_score: Option<f64>,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/enrollguard/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/enrollguard/report.md")]
        markdown_out: Utf8PathBuf,

        /// Log accepted registrations to stderr (the notification sink).
        #[arg(long)]
        notify: bool,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/enrollguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Explain a rule_id (e.g. "eligibility.credit_load") or code.
    Explain { identifier: String },
}

fn main() {
    let cli = Cli::parse();
    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            1
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Commands::Check {
            student,
            course,
            max_credit_load,
            min_score,
            report_out,
            write_markdown,
            markdown_out,
            notify,
        } => cmd_check(
            &cli.config,
            &student,
            &course,
            Overrides {
                max_credit_load,
                min_score,
            },
            &report_out,
            write_markdown,
            &markdown_out,
            notify,
        ),
        Commands::Md { report, output } => cmd_md(&report, output.as_deref()),
        Commands::Explain { identifier } => cmd_explain(&identifier),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_check(
    config: &Utf8PathBuf,
    student: &Utf8PathBuf,
    course: &Utf8PathBuf,
    overrides: Overrides,
    report_out: &Utf8PathBuf,
    write_markdown: bool,
    markdown_out: &Utf8PathBuf,
    notify: bool,
) -> anyhow::Result<i32> {
    // A missing config file is fine: defaults apply.
    let config_text = std::fs::read_to_string(config).unwrap_or_default();
    let student_json = std::fs::read_to_string(student)
        .with_context(|| format!("read student record {student}"))?;
    let course_json =
        std::fs::read_to_string(course).with_context(|| format!("read course record {course}"))?;

    let output = run_check(CheckInput {
        student_json: &student_json,
        course_json: &course_json,
        config_text: &config_text,
        overrides,
        notifier: notify.then(stderr_notifier),
    })?;

    write_text(report_out, &serialize_report(&output.report)?)?;
    if write_markdown {
        write_text(markdown_out, &render_markdown(&output.report))?;
    }

    let data = &output.report.data;
    println!(
        "{}: {} -> {}: {} ({} passed / {} failed)",
        env!("CARGO_PKG_NAME"),
        data.student,
        data.course,
        match output.report.verdict {
            Verdict::Pass => "PASS",
            Verdict::Fail => "FAIL",
        },
        data.rules_passed,
        data.rules_failed
    );

    Ok(verdict_exit_code(output.report.verdict))
}

fn cmd_md(report: &Utf8PathBuf, output: Option<&camino::Utf8Path>) -> anyhow::Result<i32> {
    let report_text =
        std::fs::read_to_string(report).with_context(|| format!("read report {report}"))?;
    let envelope = parse_report_json(&report_text)?;
    let markdown = render_markdown(&envelope);

    match output {
        Some(path) => write_text(path, &markdown)?,
        None => print!("{markdown}"),
    }
    Ok(0)
}

fn cmd_explain(identifier: &str) -> anyhow::Result<i32> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(0)
        }
        ExplainOutput::NotFound {
            identifier,
            available_rule_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                format_not_found(&identifier, available_rule_ids, available_codes)
            );
            Ok(1)
        }
    }
}
