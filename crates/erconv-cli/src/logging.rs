//! Logging setup for the erconv CLI
//!
//! Maps CLI verbosity onto a tracing level filter and installs a fmt
//! subscriber writing to stderr, so log lines never mix with converted
//! output. `RUST_LOG` overrides the derived level.

use crate::error::{Error, Result};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Logging configuration derived from CLI flags
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter
    pub level: String,
    /// Include file and line numbers
    pub source_location: bool,
}

impl LoggingConfig {
    /// Create logging config from verbosity level
    pub fn from_verbosity(verbosity: u8) -> Self {
        match verbosity {
            0 => Self {
                level: "warn".to_string(),
                source_location: false,
            },
            1 => Self {
                level: "info".to_string(),
                source_location: false,
            },
            2 => Self {
                level: "debug".to_string(),
                source_location: true,
            },
            _ => Self {
                level: "trace".to_string(),
                source_location: true,
            },
        }
    }
}

/// Initialize the global logging system
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    // RUST_LOG takes precedence over the verbosity-derived level.
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_file(config.source_location)
        .with_line_number(config.source_location)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::other(format!("Failed to initialize logging: {}", e)))
}
