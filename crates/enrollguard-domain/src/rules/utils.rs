use enrollguard_types::{Course, Student};

/// Shared well-formedness guard for entity identifiers.
///
/// Rules fail closed with the returned reason instead of assuming the
/// records are complete, so the coordinator always reaches a decision.
pub fn identity_issue(student: &Student, course: &Course) -> Option<String> {
    if student.name.trim().is_empty() {
        return Some("student identifier is empty".to_string());
    }
    if course.code.trim().is_empty() {
        return Some("course identifier is empty".to_string());
    }
    None
}
