//! Render-side view of a report.
//!
//! Deliberately decoupled from the wire DTOs so the renderer never grows a
//! dependency on report schema evolution.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdict {
    Pass,
    Fail,
}

#[derive(Clone, Debug)]
pub struct RenderableOutcome {
    pub rule_id: String,
    pub passed: bool,
    pub reason: String,
    pub code: Option<String>,
}

#[derive(Clone, Debug)]
pub struct RenderableData {
    pub student: String,
    pub course: String,
    pub rules_run: u32,
    pub rules_passed: u32,
    pub rules_failed: u32,
}

#[derive(Clone, Debug)]
pub struct RenderableReport {
    pub verdict: RenderableVerdict,
    pub outcomes: Vec<RenderableOutcome>,
    pub data: RenderableData,
    pub notes: Vec<String>,
}
