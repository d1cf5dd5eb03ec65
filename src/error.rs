//! Error types for stratum-config.

use std::path::PathBuf;

/// Result type alias for stratum-config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur when working with the configuration registry.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A configured filepath does not refer to an existing regular file.
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// Failed to load configuration from a source.
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    /// Failed to parse configuration data supplied by a source.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}
