//! Violation extraction over captured test-runner output.

pub mod signatures;
pub mod matcher;
pub mod classifier;
pub mod dedup;
pub mod stats;

pub use signatures::{Signature, SignatureId, SIGNATURES};
pub use matcher::{match_lines, ContextWindow, SignatureMatch};
pub use classifier::{build_violation, classify};
pub use dedup::deduplicate_violations;
pub use stats::extract_statistics;

use crate::models::violation::ViolationRecord;

/// Match, classify and deduplicate violations in `text`.
pub fn extract_violations(text: &str) -> Vec<ViolationRecord> {
    let lines: Vec<&str> = text.lines().collect();
    let matches = match_lines(&lines);
    deduplicate_violations(classify(&matches))
}
