use chrono::NaiveDate;
use crate::models::statistics::RunStatistics;
use crate::models::violation::ViolationRecord;
use super::formatter::{
    format_statistics, format_tooling_footer, format_violation_markdown, format_wcag_references,
};

/// Values stamped into the report that do not come from the analysis.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub date: NaiveDate,
}

impl RenderContext {
    pub fn today() -> Self {
        Self { date: chrono::Local::now().date_naive() }
    }

    fn date_label(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }
}

/// Render the markdown report for a set of deduplicated violations.
///
/// When `violations` is empty only the "no violations" notice is emitted:
/// statistics are skipped even if the run reported failing tests.
pub fn render_report(
    violations: &[ViolationRecord],
    stats: &RunStatistics,
    ctx: &RenderContext,
) -> String {
    let date = ctx.date_label();
    let mut report = format!(
        "# Análise Detalhada de Violações de Acessibilidade\n\n*Relatório gerado em {}*\n\n## Resumo Executivo\n\nDurante a execução dos testes automatizados de acessibilidade, foram identificadas violações às diretrizes WCAG 2.1 AA utilizando a ferramenta axe-core integrada ao Jest.\n\n",
        date
    );

    if violations.is_empty() {
        report.push_str("✅ **Nenhuma violação encontrada** - Todos os testes de acessibilidade passaram.\n\nOs componentes React estão implementados seguindo as diretrizes WCAG 2.1 AA.\n\n");
    } else {
        if let Some(section) = format_statistics(stats) {
            report.push_str(&section);
            report.push('\n');
        }

        report.push_str("## 🚨 Violações Identificadas\n\n");
        for (i, violation) in violations.iter().enumerate() {
            report.push_str(&format_violation_markdown(i + 1, violation));
            report.push('\n');
        }
    }

    report.push_str(format_tooling_footer());
    report.push('\n');

    if !violations.is_empty() {
        report.push_str(&format_wcag_references(violations));
        report.push('\n');
    }

    report.push_str(&format!(
        "---\n*Relatório automático baseado em execução real de testes - {}*\n",
        date
    ));
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_violations;

    fn ctx() -> RenderContext {
        RenderContext { date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap() }
    }

    fn failing_stats() -> RunStatistics {
        RunStatistics {
            tests_total: Some(5),
            tests_failed: Some(2),
            tests_passed: Some(3),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_violations_never_render_statistics() {
        let report = render_report(&[], &failing_stats(), &ctx());
        assert!(report.contains("Nenhuma violação encontrada"));
        assert!(!report.contains("Resultados dos Testes"));
        assert!(!report.contains("Violações Identificadas"));
        assert!(!report.contains("Referências WCAG"));
    }

    #[test]
    fn test_date_is_rendered_day_first() {
        let report = render_report(&[], &RunStatistics::default(), &ctx());
        assert!(report.contains("*Relatório gerado em 19/10/2026*"));
        assert!(report.ends_with("execução real de testes - 19/10/2026*\n"));
    }

    #[test]
    fn test_violations_render_in_order_with_references() {
        let violations = extract_violations(
            "Elements must have sufficient color contrast (color-contrast)\n\
             Form elements must have labels (label)",
        );
        let report = render_report(&violations, &failing_stats(), &ctx());

        assert!(report.contains("## 📊 Resultados dos Testes"));
        let first = report.find("### 1. Contraste de cores insuficiente").unwrap();
        let second = report.find("### 2. Elementos de formulário devem ter labels").unwrap();
        assert!(first < second);
        assert!(report.contains("- **color-contrast**: WCAG 1.4.3 - Contrast (Minimum)"));
        assert!(report.contains("- **label**: WCAG 1.3.1 - Info and Relationships"));
        assert!(report.contains("## 🔧 Ferramentas de Verificação"));
    }

    #[test]
    fn test_violations_without_summary_skip_statistics() {
        let violations = extract_violations("color-contrast");
        let report = render_report(&violations, &RunStatistics::default(), &ctx());
        assert!(!report.contains("Resultados dos Testes"));
        assert!(report.contains("## 🚨 Violações Identificadas"));
    }
}
