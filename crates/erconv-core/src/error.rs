//! Error types for the erconv core library
//!
//! This module defines the error handling for the conversion engine,
//! using thiserror for ergonomic error definitions.

use thiserror::Error;

/// Main error type for conversion operations
#[derive(Error, Debug)]
pub enum Error {
    /// JSON parsing and serialization errors
    ///
    /// Covers both invalid JSON and documents whose shape does not match
    /// the schema document (missing `entities` or `relationships`).
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Errors raised while converting a well-formed document
    #[error("Conversion failed: {message}")]
    Conversion { message: String },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a conversion error with a message
    pub fn conversion(message: impl Into<String>) -> Self {
        Self::Conversion {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}
