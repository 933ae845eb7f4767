use crate::models::statistics::{percentage, RunStatistics};
use crate::models::violation::ViolationRecord;
use super::wcag::wcag_clause;

pub const UNAVAILABLE: &str = "n/a";

fn format_share(part: u64, total: u64) -> String {
    match percentage(part, total) {
        Some(pct) => format!("{}%", pct),
        None => UNAVAILABLE.to_string(),
    }
}

/// Statistics section, or `None` when the tests summary line was not found.
pub fn format_statistics(stats: &RunStatistics) -> Option<String> {
    let total = stats.tests_total?;

    let mut out = String::from("## 📊 Resultados dos Testes\n\n");
    out.push_str(&format!("- **Total de testes:** {}\n", total));
    if let Some(failed) = stats.tests_failed {
        out.push_str(&format!("- **Testes falharam:** {} ({})\n", failed, format_share(failed, total)));
    }
    if let Some(passed) = stats.tests_passed {
        out.push_str(&format!("- **Testes passaram:** {} ({})\n", passed, format_share(passed, total)));
    }
    if let Some(suites_total) = stats.suites_total {
        out.push_str(&format!(
            "- **Test Suites:** {} falharam de {} total\n",
            stats.suites_failed.unwrap_or(0),
            suites_total
        ));
    }
    if let Some(secs) = stats.elapsed_secs.filter(|s| *s > 0.0) {
        out.push_str(&format!("- **Tempo de execução:** {}s\n", secs));
    }
    out.push_str("- **Ferramenta:** Jest + axe-core\n");
    Some(out)
}

pub fn format_violation_markdown(index: usize, violation: &ViolationRecord) -> String {
    let elements = violation
        .elements
        .iter()
        .map(|e| format!("- {}", e))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "### {}. {}\n\n**Regra axe-core:** `{}`\n**Arquivo:** `{}`\n\n**Descrição:** {}\n\n**Impacto para usuários:** {}\n\n**Elementos afetados:**\n{}\n\n**Código problemático:**\n```jsx\n{}\n```\n\n**Correção necessária:**\n```jsx\n{}\n```\n\n**Como corrigir:** {}\n\n---\n",
        index,
        violation.title,
        violation.rule,
        violation.file,
        violation.description,
        violation.impact,
        elements,
        violation.snippets.problem,
        violation.snippets.fix,
        violation.remediation,
    )
}

pub fn format_tooling_footer() -> &'static str {
    "## 🔧 Ferramentas de Verificação\n\n```bash\n# Executar análise completa\nnpm run test:a11y    # Jest + axe-core (testes unitários)\nnpm run test:e2e     # Playwright + axe-core (testes E2E)\nnpm run lighthouse   # Google Lighthouse (auditoria completa)\n\n# Executar tudo em sequência\nnpm run test:all-a11y\n```\n"
}

/// One WCAG cross-reference line per violation, in report order.
pub fn format_wcag_references(violations: &[ViolationRecord]) -> String {
    let mut out = String::from("## 📚 Referências WCAG 2.1\n\n");
    for v in violations {
        out.push_str(&format!("- **{}**: WCAG {}\n", v.rule, wcag_clause(&v.rule)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::violation::CodeSnippets;

    fn sample_violation(rule: &str) -> ViolationRecord {
        ViolationRecord {
            rule: rule.to_string(),
            title: "Contraste de cores insuficiente".to_string(),
            description: "Elements must have sufficient color contrast (color-contrast) - Ratio: 2.3:1".to_string(),
            impact: "Texto ilegível".to_string(),
            elements: vec!["Botão".to_string(), "Link".to_string()],
            remediation: "Aumentar contraste".to_string(),
            file: "src/App.js".to_string(),
            wcag_reference: "WCAG 1.4.3 - Contrast (Minimum)".to_string(),
            snippets: CodeSnippets {
                problem: "Problema: color: #aaa".to_string(),
                fix: "Solução: color: #333".to_string(),
            },
            engine_detail: String::new(),
        }
    }

    #[test]
    fn test_statistics_absent_without_tests_total() {
        let stats = RunStatistics { elapsed_secs: Some(3.0), ..Default::default() };
        assert!(format_statistics(&stats).is_none());
    }

    #[test]
    fn test_statistics_percentages() {
        let stats = RunStatistics {
            tests_total: Some(5),
            tests_failed: Some(2),
            tests_passed: Some(3),
            suites_total: Some(4),
            suites_failed: Some(1),
            suites_passed: Some(3),
            elapsed_secs: Some(2.5),
        };
        let section = format_statistics(&stats).unwrap();
        assert!(section.contains("- **Total de testes:** 5"));
        assert!(section.contains("- **Testes falharam:** 2 (40%)"));
        assert!(section.contains("- **Testes passaram:** 3 (60%)"));
        assert!(section.contains("- **Test Suites:** 1 falharam de 4 total"));
        assert!(section.contains("- **Tempo de execução:** 2.5s"));
    }

    #[test]
    fn test_statistics_zero_total_is_unavailable() {
        let stats = RunStatistics {
            tests_total: Some(0),
            tests_failed: Some(0),
            tests_passed: Some(0),
            ..Default::default()
        };
        let section = format_statistics(&stats).unwrap();
        assert!(section.contains("- **Testes falharam:** 0 (n/a)"));
        assert!(!section.contains("NaN"));
        assert!(!section.contains("Test Suites"));
        assert!(!section.contains("Tempo de execução"));
    }

    #[test]
    fn test_violation_block_layout() {
        let block = format_violation_markdown(2, &sample_violation("color-contrast"));
        assert!(block.starts_with("### 2. Contraste de cores insuficiente\n"));
        assert!(block.contains("**Regra axe-core:** `color-contrast`"));
        assert!(block.contains("**Elementos afetados:**\n- Botão\n- Link\n"));
        assert!(block.contains("```jsx\nProblema: color: #aaa\n```"));
        assert!(block.contains("```jsx\nSolução: color: #333\n```"));
        assert!(block.ends_with("---\n"));
    }

    #[test]
    fn test_wcag_references_use_lookup_and_fallback() {
        let refs = format_wcag_references(&[
            sample_violation("color-contrast"),
            sample_violation("label-association"),
        ]);
        assert!(refs.contains("- **color-contrast**: WCAG 1.4.3 - Contrast (Minimum)"));
        assert!(refs.contains("- **label-association**: WCAG Multiple criteria"));
    }
}
