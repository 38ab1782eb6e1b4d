//! Erconv CLI - entity-relationship schema conversion
//!
//! This is the main entry point for the erconv CLI application: read a
//! JSON schema document, convert it to the entity-module format, and
//! write the pretty-printed result.

mod cli;
mod error;
mod handlers;
mod logging;
mod output;

use cli::Cli;
use colored::control;
use error::Result;
use output::OutputWriter;
use std::process;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Set up colored output
    control::set_override(cli.use_color());

    // Initialize logging
    if let Err(e) = init_logging(&cli) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    // Run the application
    match run(cli) {
        Ok(()) => {
            process::exit(0);
        }
        Err(e) => {
            eprintln!(
                "{}",
                error::format_error(&e, control::SHOULD_COLORIZE.should_colorize())
            );
            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
fn run(cli: Cli) -> Result<()> {
    let mut output = OutputWriter::new(cli.use_color(), cli.quiet);

    tracing::info!(
        input = %cli.input.display(),
        output = %cli.output.display(),
        "Executing conversion"
    );

    handlers::handle_convert(&cli, &mut output)
}

/// Initialize the logging system
fn init_logging(cli: &Cli) -> Result<()> {
    let mut config = logging::LoggingConfig::from_verbosity(cli.verbosity_level());

    // If quiet mode, only log errors
    if cli.quiet {
        config.level = "error".to_string();
    }

    logging::init_logging(config)
}
