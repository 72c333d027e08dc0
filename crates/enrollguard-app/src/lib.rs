//! Use case orchestration for enrollguard.
//!
//! This crate provides the application layer: use cases that coordinate the
//! domain, settings, and render layers. It is intentionally thin and
//! delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod explain;
mod notify;
mod render;

pub use check::{run_check, verdict_exit_code, CheckInput, CheckOutput};
pub use explain::{format_explanation, format_not_found, run_explain, ExplainOutput};
pub use notify::{stderr_notifier, StderrNotifier};
pub use render::{parse_report_json, render_markdown, serialize_report, to_renderable, write_text};
