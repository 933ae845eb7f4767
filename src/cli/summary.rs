use std::path::Path;
use console::style;
use crate::pipeline::Analysis;

/// Print the end-of-run summary to stdout.
pub fn print_summary(analysis: &Analysis, report_path: Option<&Path>) {
    if analysis.has_violations() {
        println!(
            "{} {} tipos de violações encontradas",
            style("✖").red().bold(),
            style(analysis.violations.len()).red().bold(),
        );
        for v in &analysis.violations {
            println!("  {} {}  {}", style("•").red(), style(&v.rule).yellow(), v.title);
        }
    } else {
        println!("{} Nenhuma violação encontrada", style("✓").green().bold());
    }

    if let (Some(failed), Some(total)) = (analysis.stats.tests_failed, analysis.stats.tests_total) {
        println!("  {}/{} testes falharam", failed, total);
    }

    if let Some(path) = report_path {
        println!("{} Relatório: {}", style("📄").cyan(), style(path.display()).cyan());
    }
}
