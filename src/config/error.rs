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
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Pool min_connections exceeds max_connections")]
    InvalidPoolSize,

    #[error("Pool size exceeds maximum allowed (100)")]
    PoolSizeTooLarge,

    #[error("Invalid date pattern: {0}")]
    InvalidDatePattern(String),

    #[error("Fraction digits exceed maximum allowed (8)")]
    TooManyFractionDigits,

    #[error("Currency symbol must not be empty")]
    EmptyCurrencySymbol,

    #[error("Unknown status code in label overrides: {0}")]
    UnknownStatusCode(String),

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}
