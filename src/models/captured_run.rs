use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Combined output and exit status of one test-command invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapturedRun {
    /// Correlates log lines and artifacts of the same run.
    pub run_id: String,
    /// Standard output followed by standard error.
    pub text: String,
    /// `-1` when the process was terminated by a signal.
    pub exit_code: i32,
    pub captured_at: DateTime<Utc>,
}

impl CapturedRun {
    pub fn new(text: String, exit_code: i32) -> Self {
        Self {
            run_id: uuid::Uuid::new_v4().to_string(),
            text,
            exit_code,
            captured_at: Utc::now(),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.exit_code == 0
    }
}
