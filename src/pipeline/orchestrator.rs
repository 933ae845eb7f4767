use std::time::Duration;
use tokio_util::sync::CancellationToken;
use crate::artifacts::{self, ArtifactPaths};
use crate::capture::{capture_output, CommandSpec};
use crate::errors::A11yError;
use crate::extract::{extract_statistics, extract_violations, SIGNATURES};
use crate::models::captured_run::CapturedRun;
use crate::models::statistics::RunStatistics;
use crate::models::violation::ViolationRecord;
use crate::reporting::{render_report, RenderContext};
use tracing::{debug, info, info_span, Instrument};

/// Result of analysing one block of captured text.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub violations: Vec<ViolationRecord>,
    pub stats: RunStatistics,
    pub report: String,
}

impl Analysis {
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }
}

/// Extract violations and statistics from `text` and render the report.
pub fn analyze(text: &str, ctx: &RenderContext) -> Analysis {
    for signature in SIGNATURES.iter() {
        let present = signature.triggers.iter().any(|t| text.contains(t));
        debug!(signature = %signature.id, present, "Signature phrase scan");
    }

    let violations = extract_violations(text);
    let stats = extract_statistics(text);
    let report = render_report(&violations, &stats, ctx);

    info!(
        violations = violations.len(),
        tests_failed = ?stats.tests_failed,
        tests_total = ?stats.tests_total,
        "Analysis complete"
    );

    Analysis { violations, stats, report }
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub command: CommandSpec,
    pub timeout: Duration,
    /// Where to persist artifacts; `None` keeps everything in memory.
    pub artifacts: Option<ArtifactPaths>,
}

/// Everything produced by one report-generation call.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub run: CapturedRun,
    pub analysis: Analysis,
}

pub struct ReportPipeline {
    config: PipelineConfig,
    cancel_token: CancellationToken,
}

impl ReportPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Replace the pipeline's cancel token with an external one (e.g. a Ctrl-C handler).
    pub fn with_cancel_token(mut self, token: CancellationToken) -> Self {
        self.cancel_token = token;
        self
    }

    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    /// Capture the test command's output, analyse it and persist the artifacts.
    pub async fn run(&self, ctx: &RenderContext) -> Result<PipelineOutcome, A11yError> {
        let run = capture_output(&self.config.command, self.config.timeout, &self.cancel_token).await?;

        let span = info_span!("report", run_id = %run.run_id);
        async {
            if let Some(paths) = &self.config.artifacts {
                artifacts::write_snapshot(&paths.snapshot, &run).await?;
            }

            if run.succeeded() {
                info!("Test command passed, no violations expected");
            } else {
                info!(exit_code = run.exit_code, "Test command failed, extracting violations");
            }

            let analysis = analyze(&run.text, ctx);

            if let Some(paths) = &self.config.artifacts {
                artifacts::write_report(paths, &analysis.report, &analysis.violations).await?;
            }

            Ok::<_, A11yError>(PipelineOutcome { run, analysis })
        }
        .instrument(span)
        .await
    }
}
