use std::path::PathBuf;
use crate::artifacts::{self, ArtifactPaths};
use crate::cli::commands::AnalyzeArgs;
use crate::errors::A11yError;
use crate::pipeline::analyze;
use crate::reporting::RenderContext;
use super::summary::print_summary;
use tracing::info;

pub async fn handle_analyze(args: AnalyzeArgs, quiet: bool) -> Result<(), A11yError> {
    let input = PathBuf::from(&args.input);
    if !input.exists() {
        return Err(A11yError::Config(format!("Captured output not found: {}", input.display())));
    }

    let text = tokio::fs::read_to_string(&input).await?;
    info!(input = %input.display(), bytes = text.len(), "Analysing captured output");

    let analysis = analyze(&text, &RenderContext::today());

    let report_path = match &args.output {
        Some(dir) => {
            let paths = ArtifactPaths::in_dir(&PathBuf::from(dir));
            artifacts::write_report(&paths, &analysis.report, &analysis.violations).await?;
            Some(paths.report)
        }
        None => None,
    };

    if args.print {
        print!("{}", analysis.report);
    } else if !quiet {
        print_summary(&analysis, report_path.as_deref());
    }
    Ok(())
}
