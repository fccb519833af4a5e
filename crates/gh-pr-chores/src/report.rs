//! Colored status lines for the user
//!
//! Separate from `log`: these lines are the command's output, logging goes
//! to stderr and is off by default.

use colored::Colorize;
use std::io::{self, Write};

/// Writes semantic status lines to an output stream
pub struct StatusReporter<W: Write> {
    out: W,
}

impl StatusReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> StatusReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn info(&mut self, message: impl AsRef<str>) {
        self.line(message.as_ref().blue().to_string());
    }

    pub fn success(&mut self, message: impl AsRef<str>) {
        self.line(format!("{} {}", "✓".green(), message.as_ref().green()));
    }

    pub fn warning(&mut self, message: impl AsRef<str>) {
        self.line(format!("{} {}", "!".yellow(), message.as_ref().yellow()));
    }

    pub fn error(&mut self, message: impl AsRef<str>) {
        self.line(format!("{} {}", "✗".red(), message.as_ref().red()));
    }

    /// Uncolored line, e.g. a URL meant to be copied
    pub fn plain(&mut self, message: impl AsRef<str>) {
        self.line(message.as_ref().to_string());
    }

    pub fn blank(&mut self) {
        self.line(String::new());
    }

    fn line(&mut self, line: String) {
        // A closed stdout is not worth aborting a half-applied refresh for.
        if let Err(e) = writeln!(self.out, "{}", line) {
            log::debug!("Failed to write status line: {}", e);
        }
    }
}

#[cfg(test)]
pub(crate) fn captured_output(reporter: StatusReporter<Vec<u8>>) -> String {
    String::from_utf8(reporter.into_inner()).unwrap()
}
