use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a failed outcome.
///
/// Identity fields:
/// - rule_id
/// - code
/// - student identifier
/// - course identifier
pub fn fingerprint_for_outcome(rule_id: &str, code: &str, student: &str, course: &str) -> String {
    let canonical = [rule_id, code, student, course].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
