//! Stable identifiers for rules and outcome codes.
//!
//! `rule_id` is a dotted namespace. `code` is a short snake_case discriminator
//! attached to failed outcomes.

// Rules
pub const RULE_CREDIT_LOAD: &str = "eligibility.credit_load";
pub const RULE_PREREQUISITES: &str = "eligibility.prerequisites";
pub const RULE_ACADEMIC_STANDING: &str = "eligibility.academic_standing";

// Codes: eligibility.credit_load
pub const CODE_OVER_CREDIT_LIMIT: &str = "over_credit_limit";

// Codes: eligibility.prerequisites
pub const CODE_MISSING_PREREQUISITES: &str = "missing_prerequisites";

// Codes: eligibility.academic_standing
pub const CODE_BELOW_MIN_SCORE: &str = "below_min_score";

// Shared: malformed entity input (rules fail closed instead of panicking)
pub const CODE_MALFORMED_INPUT: &str = "malformed_input";
