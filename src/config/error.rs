//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ConfigValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("Journey template path is set but empty")]
    EmptyTemplatePath,

    #[error("Dashboard limit '{0}' must be at least 1")]
    ZeroLimit(&'static str),

    #[error("Dashboard limit '{name}' exceeds maximum allowed ({max})")]
    LimitTooLarge { name: &'static str, max: usize },
}
