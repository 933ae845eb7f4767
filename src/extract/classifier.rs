use std::collections::HashMap;
use crate::models::violation::{CodeSnippets, ViolationRecord};
use super::matcher::{ContextWindow, SignatureMatch};
use super::signatures::{signature, DetailExtractor, RecordTemplate, SignatureId};

/// Template variables derived from one context window.
pub type Details = HashMap<&'static str, String>;

/// Run a signature's detail extractors over its context window.
pub fn extract_details(extractors: &[DetailExtractor], window: &ContextWindow<'_>) -> Details {
    let mut details = Details::new();

    for extractor in extractors {
        let value = match extractor {
            DetailExtractor::Lookup { rules, fallback, .. } => rules
                .iter()
                .find(|rule| rule.needles.iter().all(|n| window.contains(n)))
                .map_or(*fallback, |rule| rule.value)
                .to_string(),
            DetailExtractor::Capture { pattern, separator, fallback, .. } => pattern
                .captures(&window.text())
                .map(|caps| {
                    caps.iter()
                        .skip(1)
                        .flatten()
                        .map(|m| m.as_str())
                        .collect::<Vec<_>>()
                        .join(*separator)
                })
                .unwrap_or_else(|| fallback.to_string()),
        };
        details.insert(extractor.var(), value);
    }

    details
}

/// Replace `{var}` placeholders with extracted details.
pub fn fill(template: &str, details: &Details) -> String {
    let mut out = template.to_string();
    for (var, value) in details {
        out = out.replace(&format!("{{{}}}", var), value);
    }
    out
}

fn build_record(id: SignatureId, template: &RecordTemplate, details: &Details) -> ViolationRecord {
    ViolationRecord {
        rule: id.as_str().to_string(),
        title: fill(template.title, details),
        description: fill(template.description, details),
        impact: fill(template.impact, details),
        elements: template.elements.iter().map(|e| fill(e, details)).collect(),
        remediation: fill(template.remediation, details),
        file: template.file.to_string(),
        wcag_reference: template.wcag_reference.to_string(),
        snippets: CodeSnippets {
            problem: format!("Problema: {}", fill(template.problem, details)),
            fix: format!("Solução: {}", fill(template.fix, details)),
        },
        engine_detail: fill(template.engine_detail, details),
    }
}

/// Build the violation record for a single signature match.
pub fn build_violation(hit: &SignatureMatch<'_>) -> ViolationRecord {
    let sig = signature(hit.signature);
    let details = extract_details(&sig.extractors, &hit.window);
    build_record(sig.id, &sig.template, &details)
}

/// Build one record per match, in match order.
pub fn classify(matches: &[SignatureMatch<'_>]) -> Vec<ViolationRecord> {
    matches.iter().map(build_violation).collect()
}
