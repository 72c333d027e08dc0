//! Built-in eligibility rules.
//!
//! Each rule encodes exactly one policy and depends on nothing but its own
//! configuration. New rules live in their own module and plug into the
//! coordinator without touching existing ones.

mod academic_standing;
mod credit_load;
mod prerequisites;
mod utils;


pub use academic_standing::{AcademicStandingRule, DEFAULT_MIN_SCORE};
pub use credit_load::{CreditLoadRule, DEFAULT_MAX_CREDIT_LOAD};
pub use prerequisites::PrerequisiteRule;
