use crate::fingerprint::fingerprint_for_outcome;
use crate::notify::NotificationSink;
use crate::report::DomainReport;
use crate::rule::Rule;
use enrollguard_types::{Course, OutcomeCounts, RuleOutcome, Student, Verdict};

/// Runs an injected, ordered set of rules against a (student, course) pair.
///
/// The coordinator holds zero policy of its own: the rules applied are
/// exactly the ones injected at construction, in injection order. It never
/// constructs rules itself. `evaluate` only reads the rule list, so one
/// coordinator may serve repeated and concurrent evaluations.
pub struct Coordinator {
    rules: Vec<Box<dyn Rule>>,
    notifier: Option<Box<dyn NotificationSink>>,
}

impl Coordinator {
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self {
            rules,
            notifier: None,
        }
    }

    /// Attach a sink told about successful registrations.
    pub fn with_notifier(mut self, notifier: Box<dyn NotificationSink>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Evaluate every rule and reduce to one verdict.
    ///
    /// Rules are never short-circuited: all of them run even after a failure,
    /// so the caller sees every violation in a single pass. The overall
    /// verdict is the AND of the individual ones; an empty rule list is a
    /// vacuous pass.
    ///
    /// The verdict is decided before the notification sink is consulted. On
    /// a pass the sink (if any) is invoked once, fire-and-forget; a sink
    /// error lands in `notes` and never changes the verdict. On a fail no
    /// notification is sent.
    pub fn evaluate(&self, student: &Student, course: &Course) -> DomainReport {
        let mut outcomes: Vec<RuleOutcome> = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            let verdict = rule.validate(student, course);
            let fingerprint = verdict
                .code
                .map(|code| fingerprint_for_outcome(rule.id(), code, &student.name, &course.code));

            outcomes.push(RuleOutcome {
                rule_id: rule.id().to_string(),
                passed: verdict.passed,
                reason: verdict.reason,
                code: verdict.code.map(str::to_string),
                fingerprint,
                data: verdict.data,
            });
        }

        let verdict = if outcomes.iter().all(|o| o.passed) {
            Verdict::Pass
        } else {
            Verdict::Fail
        };
        let counts = OutcomeCounts::from_outcomes(&outcomes);

        let mut notes = Vec::new();
        if verdict == Verdict::Pass
            && let Some(notifier) = &self.notifier
            && let Err(err) = notifier.notify(&student.name, &course.code)
        {
            notes.push(err.to_string());
        }

        DomainReport {
            verdict,
            outcomes,
            counts,
            notes,
        }
    }
}
