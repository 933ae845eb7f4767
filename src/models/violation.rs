use serde::{Deserialize, Serialize};

/// Problem/fix pair shown in the report as two code blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSnippets {
    pub problem: String,
    pub fix: String,
}

/// A single accessibility violation reconstructed from test-runner output.
///
/// Records are built whole by the classifier and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationRecord {
    /// Stable rule identifier (e.g. "label", "color-contrast"). Deduplication key.
    pub rule: String,
    pub title: String,
    /// Mirrors the detection engine's own wording.
    pub description: String,
    /// What the failure means for users of assistive technology.
    pub impact: String,
    pub elements: Vec<String>,
    pub remediation: String,
    /// Source file most likely responsible.
    pub file: String,
    pub wcag_reference: String,
    pub snippets: CodeSnippets,
    /// Raw diagnostic as reported by the underlying engine.
    pub engine_detail: String,
}
