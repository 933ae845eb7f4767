use thiserror::Error;

#[derive(Debug, Error)]
pub enum A11yError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to launch test command: {0}")]
    Launch(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Cancelled: {0}")]
    Cancelled(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
