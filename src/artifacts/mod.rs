//! Persistence of the snapshot, report and violation dump.
//!
//! Every destination is passed in explicitly; nothing here writes to a
//! process-wide path.

use std::path::{Path, PathBuf};
use crate::errors::A11yError;
use crate::models::captured_run::CapturedRun;
use crate::models::violation::ViolationRecord;
use tracing::{debug, info};

pub const SNAPSHOT_FILE: &str = "debug-output.txt";
pub const REPORT_FILE: &str = "violacoes-encontradas.md";
pub const VIOLATIONS_FILE: &str = "violations.json";

/// Atomic file write: write to temp, then rename
pub async fn atomic_write(path: &Path, content: &str) -> Result<(), A11yError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    let tmp = path.with_extension("tmp");
    tokio::fs::write(&tmp, content).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}

/// Overwrite `dest` with the raw captured text of `run`.
pub async fn write_snapshot(dest: &Path, run: &CapturedRun) -> Result<(), A11yError> {
    atomic_write(dest, &run.text).await?;
    debug!(run_id = %run.run_id, path = %dest.display(), "Debug snapshot written");
    Ok(())
}

/// Destinations for one run's artifacts.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub snapshot: PathBuf,
    pub report: PathBuf,
    pub violations: PathBuf,
}

impl ArtifactPaths {
    /// Standard file names under `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            snapshot: dir.join(SNAPSHOT_FILE),
            report: dir.join(REPORT_FILE),
            violations: dir.join(VIOLATIONS_FILE),
        }
    }
}

/// Write the rendered report and the JSON dump of the violations.
pub async fn write_report(
    paths: &ArtifactPaths,
    report: &str,
    violations: &[ViolationRecord],
) -> Result<(), A11yError> {
    atomic_write(&paths.report, report).await?;
    let json = serde_json::to_string_pretty(violations)?;
    atomic_write(&paths.violations, &json).await?;
    info!(
        report = %paths.report.display(),
        violations = violations.len(),
        "Report written"
    );
    Ok(())
}
