//! Error types for Kinship.

pub use crate::catalog::CatalogError;
pub use crate::correlator::CorrelationError;
pub use crate::formatter::FormatError;
pub use crate::pipeline::PipelineError;
pub use crate::validator::ValidationError;

/// Top-level error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Correlation error: {0}")]
    Correlation(#[from] CorrelationError),

    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}
