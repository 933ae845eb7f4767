use super::signatures::{SignatureId, SIGNATURES};

/// Lines surrounding a signature hit.
#[derive(Debug, Clone, Copy)]
pub struct ContextWindow<'a> {
    /// Index of the first window line in the captured text.
    pub start: usize,
    pub lines: &'a [&'a str],
}

impl<'a> ContextWindow<'a> {
    /// Slice `lines[index - before .. index + after]`, clamped to the text.
    pub fn around(lines: &'a [&'a str], index: usize, before: usize, after: usize) -> Self {
        let start = index.saturating_sub(before);
        let end = index.saturating_add(after).min(lines.len()).max(start);
        Self { start, lines: &lines[start..end] }
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// A known phrase found at `line_index`, with its context window.
#[derive(Debug, Clone)]
pub struct SignatureMatch<'a> {
    pub line_index: usize,
    pub signature: SignatureId,
    pub window: ContextWindow<'a>,
}

/// Scan lines in order, testing every table signature against each line.
///
/// All hits are kept, including repeats of the same signature.
pub fn match_lines<'a>(lines: &'a [&'a str]) -> Vec<SignatureMatch<'a>> {
    let mut matches = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        for signature in SIGNATURES.iter() {
            if signature.matches(line) {
                matches.push(SignatureMatch {
                    line_index: index,
                    signature: signature.id,
                    window: ContextWindow::around(lines, index, signature.before, signature.after),
                });
            }
        }
    }

    matches
}
