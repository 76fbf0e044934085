//! Error types for clusterctl

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Unsupported file format: {} (expected .json, .yaml or .yml)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Engine error: {0}")]
    EngineError(#[from] cluster_engine::EngineError),
}

impl CliError {
    /// Process exit code for this error class.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidScenario(_) => 3,
            CliError::InvalidConfiguration(_)
            | CliError::UnsupportedFormat(_)
            | CliError::JsonError(_)
            | CliError::YamlError(_) => 4,
            CliError::IoError(_) | CliError::EngineError(_) => 1,
        }
    }
}
