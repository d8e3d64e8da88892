//! Error types for the sample plugin

use thiserror::Error;

/// Main error type for the plugin.
///
/// Variants carry their cause as `source()` only, so `{:#}` prints each link
/// of the chain once.
#[derive(Error, Debug)]
pub enum PluginError {
    #[error("Failed to serialize record")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias using PluginError
pub type Result<T> = std::result::Result<T, PluginError>;
