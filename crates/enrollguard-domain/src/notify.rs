use std::sync::Arc;
use thiserror::Error;

/// Why a notification could not be delivered.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("notification failed: {0}")]
pub struct NotifyError(pub String);

/// External collaborator told about a successful registration.
///
/// Fire-and-forget from the coordinator's perspective: the call happens at
/// most once per evaluation, only after an overall pass, and a sink error
/// never changes the already-decided verdict. The domain does not block on,
/// retry, or interpret the delivery beyond recording its failure.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, student: &str, course: &str) -> Result<(), NotifyError>;
}

impl<T: NotificationSink + ?Sized> NotificationSink for Arc<T> {
    fn notify(&self, student: &str, course: &str) -> Result<(), NotifyError> {
        (**self).notify(student, course)
    }
}
