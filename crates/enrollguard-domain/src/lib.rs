//! Pure eligibility evaluation (no IO).
//!
//! Input: student and course records constructed elsewhere.
//! Output: per-rule outcomes + overall verdict.

#![forbid(unsafe_code)]

pub mod notify;
pub mod report;
pub mod rule;
pub mod rules;

mod coordinator;
mod fingerprint;

#[cfg(test)]
mod proptests;
#[cfg(test)]
pub(crate) mod test_support;

pub use coordinator::Coordinator;
pub use rule::{Rule, RuleConfigError, RuleVerdict};
