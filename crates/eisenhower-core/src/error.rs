//! Core error types for eisenhower-core.
//!
//! Classification itself never fails; these types cover configuration
//! handling and the internal causes of a refinement fallback.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for eisenhower-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration tree
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Reasons a refinement attempt falls back to the heuristic answer.
///
/// These never reach callers of [`crate::RefineClient::refine`]; they are
/// logged and collapsed into the fixed fallback result.
#[derive(Error, Debug)]
pub enum RefineError {
    /// Connection, DNS or body-read failure
    #[error("transport failed: {0}")]
    Transport(String),

    /// Service answered with a non-success HTTP status
    #[error("service returned HTTP {0}")]
    Status(u16),

    /// Response did not have the expected shape
    #[error("unparseable response: {0}")]
    Parse(String),

    /// Time budget elapsed before a response arrived
    #[error("no response within {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },
}

impl From<reqwest::Error> for RefineError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => RefineError::Status(status.as_u16()),
            None if err.is_decode() => RefineError::Parse(err.to_string()),
            None => RefineError::Transport(err.to_string()),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
