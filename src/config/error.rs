//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Data directory must not be empty")]
    EmptyDataDir,

    #[error("Dataset file name missing: {0}")]
    MissingDatasetFile(&'static str),

    #[error("Dataset file name must not contain path separators: {0}")]
    DatasetFileNotPlain(&'static str),

    #[error("Log filter must not be empty")]
    EmptyLogFilter,
}
