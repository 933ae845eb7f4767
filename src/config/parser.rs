use std::path::Path;
use crate::errors::A11yError;
use super::types::A11yConfig;
use super::schema::CONFIG_SCHEMA;
use tracing::warn;

pub async fn parse_config(path: &Path) -> Result<A11yConfig, A11yError> {
    if !path.exists() {
        return Err(A11yError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(A11yError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    parse_config_str(&content)
}

pub fn parse_config_str(content: &str) -> Result<A11yConfig, A11yError> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;

    // An empty file is a valid, all-defaults config
    if yaml.is_null() {
        return Ok(A11yConfig::default());
    }

    // JSON Schema validation
    validate_schema(&yaml)?;

    // Parse into typed config
    let config: A11yConfig = serde_yaml::from_value(yaml)?;

    validate_semantics(&config)?;

    Ok(config)
}

/// Validate config against the JSON schema for structural correctness.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), A11yError> {
    let json_value = serde_json::to_value(yaml)
        .map_err(|e| A11yError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| A11yError::Config(format!("Schema compilation error: {}", e)))?;

    let result = compiled.validate(&json_value);
    if let Err(errors) = result {
        // Advisory: typed parsing and semantic checks below are authoritative
        for e in errors {
            warn!(validation_error = %format!("{} at {}", e, e.instance_path), "Config schema warning");
        }
    }

    Ok(())
}

/// Reject values that parse but cannot produce a usable run.
fn validate_semantics(config: &A11yConfig) -> Result<(), A11yError> {
    if let Some(command) = &config.command {
        if command.program.trim().is_empty() {
            return Err(A11yError::Config("command.program must not be empty".into()));
        }
        if let Some(dir) = &command.working_dir {
            if !dir.is_dir() {
                warn!(working_dir = %dir.display(), "Configured working directory does not exist");
            }
        }
    }

    if let Some(capture) = &config.capture {
        if capture.timeout_secs == Some(0) {
            return Err(A11yError::Config("capture.timeout_secs must be greater than zero".into()));
        }
    }

    Ok(())
}
