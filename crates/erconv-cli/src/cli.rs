//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API.

use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;

/// Erconv CLI - entity-relationship schema conversion
///
/// Converts a JSON-encoded entity-relationship schema into the
/// entity-module format consumed by code generators and ORMs.
#[derive(Parser, Debug)]
#[command(name = "erconv", version, author, about, long_about = None)]
pub struct Cli {
    /// Path to the input schema document
    #[arg(value_name = "INPUT", default_value = "input.json")]
    pub input: PathBuf,

    /// Destination path for the converted output
    #[arg(value_name = "OUTPUT", default_value = "output.json")]
    pub output: PathBuf,

    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_paths() {
        let cli = Cli::parse_from(["erconv"]);
        assert_eq!(cli.input, PathBuf::from("input.json"));
        assert_eq!(cli.output, PathBuf::from("output.json"));
    }

    #[test]
    fn test_explicit_paths() {
        let cli = Cli::parse_from(["erconv", "schema.json", "entities.json"]);
        assert_eq!(cli.input, PathBuf::from("schema.json"));
        assert_eq!(cli.output, PathBuf::from("entities.json"));
    }

    #[test]
    fn test_verbosity_level() {
        let cli = Cli::parse_from(["erconv", "-vv"]);
        assert_eq!(cli.verbosity_level(), 2);

        let quiet_cli = Cli::parse_from(["erconv", "--quiet"]);
        assert_eq!(quiet_cli.verbosity_level(), 0);
    }
}
