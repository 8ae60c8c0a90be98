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
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("GRA distinguishing coefficient must be in (0, 1], got {0}")]
    InvalidGraRho(f64),

    #[error("Entropy epsilon must be positive, got {0}")]
    InvalidEntropyEpsilon(f64),

    #[error("AHP max_iterations must be at least 1")]
    InvalidMaxIterations,

    #[error("AHP tolerance must be positive, got {0}")]
    InvalidTolerance(f64),

    #[error("AHP consistency threshold must be positive, got {0}")]
    InvalidConsistencyThreshold(f64),

    #[error("Unknown log level '{0}'")]
    InvalidLogLevel(String),
}
