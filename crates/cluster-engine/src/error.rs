//! Error types for the engine crate.

use cluster_inputs::InputId;

/// Configuration field outside its accepted range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `value` lies outside `[min, max]`.
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Configuration key
        field: &'static str,
        /// Rejected value
        value: u32,
        /// Smallest accepted value
        min: u32,
        /// Largest accepted value
        max: u32,
    },
}

impl ConfigError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            ConfigError::OutOfRange { field, .. } => field,
        }
    }
}

/// Errors raised while building or finishing an engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration failed validation.
    #[error("Invalid engine configuration: {0}")]
    Config(#[from] ConfigError),

    /// Descriptor row out of place or inconsistent with its mode.
    #[error("Descriptor table defect at input '{0}'")]
    DescriptorTable(InputId),

    /// Final flush of the report sink failed.
    #[error("Report sink error: {0}")]
    Sink(#[from] std::io::Error),
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
