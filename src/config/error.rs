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
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid host address: {0}")]
    InvalidHost(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Synthetic sample count must be at least 10")]
    SampleCountTooSmall,

    #[error("Test fraction must lie strictly between 0 and 1")]
    InvalidTestFraction,

    #[error("Tree count must be between 1 and 1000")]
    InvalidTreeCount,

    #[error("Session idle timeout must be positive")]
    InvalidIdleTimeout,

    #[error("Session sweep interval must be positive and no longer than the idle timeout")]
    InvalidSweepInterval,
}
