use enrollguard_types::{OutcomeCounts, RuleOutcome, Verdict};

/// Result of one coordinator evaluation.
#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    /// One outcome per injected rule, in injection order.
    pub outcomes: Vec<RuleOutcome>,
    pub counts: OutcomeCounts,
    /// Operational notes (e.g. a notification sink failure); never
    /// verdict-bearing.
    pub notes: Vec<String>,
}

impl DomainReport {
    pub fn passed(&self) -> bool {
        self.verdict == Verdict::Pass
    }
}
