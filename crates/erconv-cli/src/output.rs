//! Output formatting and writing utilities
//!
//! Status messages for the terminal. Converted JSON always goes to the
//! destination file, so quiet mode can drop these lines wholesale.

use crate::error::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Output writer that handles message styling and quiet mode
pub struct OutputWriter {
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer targeting stdout
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            use_color,
            quiet,
            writer: Box::new(io::stdout()),
        }
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(use_color: bool, quiet: bool, writer: Box<dyn Write>) -> Self {
        Self {
            use_color,
            quiet,
            writer,
        }
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an informational message
    pub fn info(&mut self, message: &str) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.use_color {
            self.writeln(&message.dimmed().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }
}
