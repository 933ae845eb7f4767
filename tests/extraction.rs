use a11ylens::extract::{extract_statistics, extract_violations, match_lines, SignatureId};

const FAILURE: &str = include_str!("fixtures/jest-axe-failure.txt");
const SUCCESS: &str = include_str!("fixtures/jest-axe-success.txt");

#[test]
fn test_failure_output_rules_in_first_seen_order() {
    let violations = extract_violations(FAILURE);
    let rules: Vec<&str> = violations.iter().map(|v| v.rule.as_str()).collect();
    assert_eq!(
        rules,
        vec![
            "aria-describedby-refer",
            "label",
            "label-title-only",
            "label-association",
            "color-contrast",
        ]
    );
}

#[test]
fn test_repeated_label_keeps_first_element() {
    let lines: Vec<&str> = FAILURE.lines().collect();
    let label_hits = match_lines(&lines)
        .into_iter()
        .filter(|m| m.signature == SignatureId::Label)
        .count();
    assert_eq!(label_hits, 2);

    let violations = extract_violations(FAILURE);
    let label: Vec<_> = violations.iter().filter(|v| v.rule == "label").collect();
    assert_eq!(label.len(), 1);
    assert_eq!(label[0].elements, vec!["Campo Nome (id=\"name\")".to_string()]);
}

#[test]
fn test_contrast_record_uses_window_details() {
    let violations = extract_violations(FAILURE);
    let contrast = violations.iter().find(|v| v.rule == "color-contrast").unwrap();
    assert!(contrast.description.contains("Ratio: 4.5:1"));
    assert!(contrast.elements[0].starts_with("Botão amarelo com texto branco"));
    assert_eq!(contrast.file, "src/App.js");
}

#[test]
fn test_failure_statistics() {
    let stats = extract_statistics(FAILURE);
    assert_eq!(stats.tests_failed, Some(3));
    assert_eq!(stats.tests_passed, Some(9));
    assert_eq!(stats.tests_total, Some(12));
    assert_eq!(stats.suites_failed, Some(2));
    assert_eq!(stats.suites_passed, Some(2));
    assert_eq!(stats.suites_total, Some(4));
    assert_eq!(stats.elapsed_secs, Some(3.871));
}

#[test]
fn test_success_output_has_no_violations() {
    assert!(extract_violations(SUCCESS).is_empty());
    let stats = extract_statistics(SUCCESS);
    assert_eq!(stats.tests_failed, Some(0));
    assert_eq!(stats.tests_total, Some(6));
    assert_eq!(stats.suites_failed, Some(0));
}

#[test]
fn test_repeated_phrase_yields_single_record() {
    for n in 2..6 {
        let text = "Form elements should have a visible label (label-title-only)\n".repeat(n);
        let violations = extract_violations(&text);
        assert_eq!(violations.len(), 1, "n = {}", n);
        assert_eq!(violations[0].rule, "label-title-only");
    }
}

#[test]
fn test_extraction_is_deterministic() {
    assert_eq!(extract_violations(FAILURE), extract_violations(FAILURE));
    assert_eq!(extract_statistics(FAILURE), extract_statistics(FAILURE));
}

#[test]
fn test_crlf_output_is_handled() {
    let text = "#name\r\nForm elements must have labels (label)\r\nTests: 1 failed, 0 passed, 1 total\r\n";
    let violations = extract_violations(text);
    assert_eq!(violations[0].elements[0], "Campo Nome (id=\"name\")");
    assert_eq!(extract_statistics(text).tests_failed, Some(1));
}
