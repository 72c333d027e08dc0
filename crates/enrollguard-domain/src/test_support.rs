use crate::notify::{NotificationSink, NotifyError};
use enrollguard_types::{Course, Student};
use std::sync::Mutex;

pub fn student(name: &str, completed: &[&str], current_credit_load: u32, score: f64) -> Student {
    Student {
        name: name.to_string(),
        completed_courses: completed.iter().map(|s| s.to_string()).collect(),
        current_credit_load,
        cumulative_score: score,
    }
}

pub fn course(code: &str, credit_weight: u32, prerequisites: &[&str]) -> Course {
    Course {
        code: code.to_string(),
        credit_weight,
        prerequisites: prerequisites.iter().map(|s| s.to_string()).collect(),
    }
}

/// Sink that records every notify call.
#[derive(Default)]
pub struct RecordingSink {
    calls: Mutex<Vec<(String, String)>>,
}

impl RecordingSink {
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().expect("sink mutex poisoned").clone()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, student: &str, course: &str) -> Result<(), NotifyError> {
        self.calls
            .lock()
            .expect("sink mutex poisoned")
            .push((student.to_string(), course.to_string()));
        Ok(())
    }
}

/// Sink whose delivery always fails.
pub struct FailingSink;

impl NotificationSink for FailingSink {
    fn notify(&self, _student: &str, _course: &str) -> Result<(), NotifyError> {
        Err(NotifyError("notification gateway unreachable".to_string()))
    }
}
