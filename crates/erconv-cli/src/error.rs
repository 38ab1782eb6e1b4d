//! Error types and handling for the CLI
//!
//! This module provides error types and utilities for handling
//! the failure modes of the conversion pipeline.

use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error from the erconv-core library
    #[error("Core error: {0}")]
    Core(#[from] erconv_core::Error),

    /// Input file not found
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Core(_) => 2,
            Self::FileNotFound { .. } => 3,
            Self::Json(_) => 4,
            Self::Other { .. } => 99,
        }
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_display() {
        let err = Error::FileNotFound {
            path: PathBuf::from("missing.json"),
        };
        assert_eq!(err.to_string(), "File not found: missing.json");
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_format_error_plain() {
        let err = Error::other("something went wrong");
        assert_eq!(
            format_error(&err, false),
            "Error: something went wrong"
        );
    }

    #[test]
    fn test_exit_codes_distinguish_error_classes() {
        let io_err: Error = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        let json_err: Error = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        let core_err: Error = erconv_core::Error::conversion("bad relationship").into();

        assert_ne!(io_err.exit_code(), json_err.exit_code());
        assert_ne!(json_err.exit_code(), core_err.exit_code());
    }
}
