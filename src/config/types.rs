use std::path::PathBuf;
use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::capture::CommandSpec;

pub const DEFAULT_TIMEOUT_SECS: u64 = 900;
pub const DEFAULT_OUTPUT_DIR: &str = "./reports";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct A11yConfig {
    pub command: Option<CommandSpec>,
    pub capture: Option<CaptureConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CaptureConfig {
    /// Upper bound on the wait for the test command to exit.
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct OutputConfig {
    pub directory: Option<PathBuf>,
    /// Overrides `<directory>/debug-output.txt`.
    pub snapshot: Option<PathBuf>,
    /// Overrides `<directory>/violacoes-encontradas.md`.
    pub report: Option<PathBuf>,
}

impl A11yConfig {
    pub fn command(&self) -> CommandSpec {
        self.command.clone().unwrap_or_default()
    }

    pub fn timeout(&self) -> Duration {
        let secs = self
            .capture
            .as_ref()
            .and_then(|c| c.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output
            .as_ref()
            .and_then(|o| o.directory.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }
}
