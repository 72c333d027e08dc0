//! Stable DTOs and IDs used across the enrollguard workspace.
//!
//! This crate is intentionally boring:
//! - entity records consumed by every rule (Student, Course)
//! - data types for the emitted report
//! - stable string IDs and codes for rules
//! - explain registry for policy guidance

#![forbid(unsafe_code)]

pub mod entities;
pub mod explain;
pub mod ids;
pub mod report;

pub use entities::{Course, Student};
pub use explain::{lookup_explanation, Explanation};
pub use report::{
    EligibilityData, OutcomeCounts, ReportEnvelope, RuleOutcome, ToolMeta, Verdict,
    SCHEMA_REPORT_V1,
};
