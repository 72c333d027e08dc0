//! Config parsing and rule-list resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration
//! provided as strings, and builds the ordered rule list the coordinator is
//! constructed over. Rule-construction errors (invalid thresholds) surface
//! here, before any evaluation runs.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{EnrollConfigV1, RuleConfig};
pub use resolve::{resolve_rules, Overrides, ResolvedRules, ResolvedSummary};

/// Parse `enrollguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<EnrollConfigV1> {
    let cfg: EnrollConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}
