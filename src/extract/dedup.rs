use std::collections::HashSet;
use crate::models::violation::ViolationRecord;

/// Keep the first record per rule identifier, preserving first-seen order.
pub fn deduplicate_violations(violations: Vec<ViolationRecord>) -> Vec<ViolationRecord> {
    let mut seen: HashSet<String> = HashSet::new();
    violations
        .into_iter()
        .filter(|v| seen.insert(v.rule.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::violation::CodeSnippets;

    fn record(rule: &str, element: &str) -> ViolationRecord {
        ViolationRecord {
            rule: rule.to_string(),
            title: format!("{} title", rule),
            description: String::new(),
            impact: String::new(),
            elements: vec![element.to_string()],
            remediation: String::new(),
            file: String::new(),
            wcag_reference: String::new(),
            snippets: CodeSnippets { problem: String::new(), fix: String::new() },
            engine_detail: String::new(),
        }
    }

    #[test]
    fn test_first_seen_wins() {
        let out = deduplicate_violations(vec![
            record("label", "Campo Nome"),
            record("label", "Campo Email"),
        ]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].elements[0], "Campo Nome");
    }

    #[test]
    fn test_order_preserved() {
        let out = deduplicate_violations(vec![
            record("color-contrast", "a"),
            record("label", "b"),
            record("color-contrast", "c"),
            record("aria-describedby-refer", "d"),
            record("label", "e"),
        ]);
        let rules: Vec<_> = out.iter().map(|v| v.rule.as_str()).collect();
        assert_eq!(rules, vec!["color-contrast", "label", "aria-describedby-refer"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(deduplicate_violations(Vec::new()).is_empty());
    }
}
