use super::types::A11yError;

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    /// Fatal errors abort report generation; nothing is written.
    pub fatal: bool,
}

impl A11yError {
    /// Classify this error to determine its type and whether it aborts the run.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            A11yError::Launch(_) => ErrorClassification {
                error_type: "LaunchError",
                fatal: true,
            },
            A11yError::Timeout(_) => ErrorClassification {
                error_type: "TimeoutError",
                fatal: true,
            },
            A11yError::Cancelled(_) => ErrorClassification {
                error_type: "CancelledError",
                fatal: true,
            },
            A11yError::Config(_) => ErrorClassification {
                error_type: "ConfigError",
                fatal: true,
            },

            // Artifact persistence: the report was produced, only the sink failed
            A11yError::Io(_) => ErrorClassification {
                error_type: "IoError",
                fatal: false,
            },
            A11yError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                fatal: false,
            },
            A11yError::Yaml(_) => ErrorClassification {
                error_type: "YamlError",
                fatal: true,
            },
        }
    }

    /// Process exit code used by the CLI for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            A11yError::Config(_) | A11yError::Yaml(_) => 2,
            A11yError::Launch(_) => 3,
            A11yError::Timeout(_) => 4,
            A11yError::Cancelled(_) => 130,
            _ => 1,
        }
    }
}
