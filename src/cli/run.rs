use std::path::PathBuf;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use crate::artifacts::ArtifactPaths;
use crate::capture::CommandSpec;
use crate::cli::commands::RunArgs;
use crate::config::{self, A11yConfig};
use crate::errors::A11yError;
use crate::pipeline::{PipelineConfig, ReportPipeline};
use crate::reporting::RenderContext;
use super::progress::RunProgress;
use super::summary::print_summary;
use tracing::{info, warn};

pub async fn handle_run(args: RunArgs, quiet: bool) -> Result<(), A11yError> {
    let file_config = match &args.config {
        Some(path) => config::parse_config(&PathBuf::from(path)).await?,
        None => A11yConfig::default(),
    };

    let pipeline_config = build_pipeline_config(&args, &file_config)?;
    let report_path = pipeline_config.artifacts.as_ref().map(|a| a.report.clone());
    info!(command = %pipeline_config.command.display(), "Generating accessibility report");

    let token = CancellationToken::new();
    let ctrl_c_token = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, stopping test command");
            ctrl_c_token.cancel();
        }
    });

    let progress = RunProgress::start(
        format!("Executando {}", pipeline_config.command.display()),
        quiet,
    );
    let pipeline = ReportPipeline::new(pipeline_config).with_cancel_token(token);
    let result = pipeline.run(&RenderContext::today()).await;
    progress.finish();

    let outcome = result?;
    if !quiet {
        print_summary(&outcome.analysis, report_path.as_deref());
    }
    Ok(())
}

fn build_pipeline_config(args: &RunArgs, file_config: &A11yConfig) -> Result<PipelineConfig, A11yError> {
    let command = if let Some(line) = &args.shell {
        CommandSpec::shell(line)
    } else if let Some((program, rest)) = args.command.split_first() {
        CommandSpec::new(program.clone(), rest.iter().cloned())
    } else {
        file_config.command()
    };

    let timeout = match args.timeout {
        Some(0) => return Err(A11yError::Config("--timeout must be greater than zero".into())),
        Some(secs) => Duration::from_secs(secs),
        None => file_config.timeout(),
    };

    let output_dir = args
        .output
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| file_config.output_dir());
    let mut artifacts = ArtifactPaths::in_dir(&output_dir);
    if let Some(output) = &file_config.output {
        if let Some(snapshot) = &output.snapshot {
            artifacts.snapshot = snapshot.clone();
        }
        if let Some(report) = &output.report {
            artifacts.report = report.clone();
        }
    }

    Ok(PipelineConfig { command, timeout, artifacts: Some(artifacts) })
}
