use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A student as seen by the eligibility rules.
///
/// Immutable for the duration of a validation run: rules borrow it and never
/// mutate it, so repeated evaluations against the same record are guaranteed
/// to produce identical verdicts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Student {
    /// Identifier (name or student id).
    pub name: String,

    /// Identifiers of courses the student has already completed.
    #[serde(default)]
    pub completed_courses: BTreeSet<String>,

    /// Credits the student is currently enrolled in.
    #[serde(default)]
    pub current_credit_load: u32,

    /// Cumulative academic score on a 0.0–4.0 scale.
    #[serde(default)]
    pub cumulative_score: f64,
}

/// A course a student wants to register for.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Course {
    /// Course identifier (e.g. "AI201").
    pub code: String,

    /// Credit weight of the course. A well-formed course has a positive
    /// weight; rules fail closed on zero.
    pub credit_weight: u32,

    /// Identifiers of courses that must be completed first.
    #[serde(default)]
    pub prerequisites: BTreeSet<String>,
}
