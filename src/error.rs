//! Custom error types for homefin
//!
//! This module defines the error hierarchy for the library using thiserror
//! for ergonomic error definitions. The finance services only ever return
//! [`HomefinError::InvalidArgument`]; the remaining variants belong to the
//! configuration, input and CLI layers.

use thiserror::Error;

/// The main error type for homefin operations
#[derive(Error, Debug)]
pub enum HomefinError {
    /// Validation failure of a finance operation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Errors reading caller-supplied input files
    #[error("Input error: {0}")]
    Input(String),
}

impl HomefinError {
    /// Create an invalid-argument error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Check if this is an invalid-argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

impl From<std::io::Error> for HomefinError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for HomefinError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for HomefinError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for homefin operations
pub type HomefinResult<T> = Result<T, HomefinError>;
