use enrollguard_domain::notify::{NotificationSink, NotifyError};

/// Sink that logs successful registrations to stderr.
///
/// This is the default collaborator wired up by the CLI. Real deployments
/// put an email or message-queue adapter behind the same trait.
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrNotifier;

impl NotificationSink for StderrNotifier {
    fn notify(&self, student: &str, course: &str) -> Result<(), NotifyError> {
        eprintln!("registration accepted: {student} -> {course}");
        Ok(())
    }
}

/// Boxed stderr sink, ready to hand to [`CheckInput`](crate::CheckInput).
pub fn stderr_notifier() -> Box<dyn NotificationSink> {
    Box::new(StderrNotifier)
}
