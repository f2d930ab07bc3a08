//! Output formatting for CLI commands
//!
//! Provides utilities for formatting command output in human-readable
//! or JSON formats. Supports colored output (respects NO_COLOR env var).

use crate::cli::OutputFormat;

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for labels/headers
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for file paths
    pub fn file_path(s: &str) -> ColoredString {
        s.blue()
    }

    /// Style for directory entries
    pub fn directory(s: &str) -> ColoredString {
        s.blue().bold()
    }

    /// Style for numbers/counts
    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for error messages
    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }

    /// Style for dim/secondary text
    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }
}

/// Serialize `data` as pretty JSON
pub fn to_json<T: serde::Serialize>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(data)
}

/// Print a rendered command output
///
/// Empty output prints nothing rather than a blank line.
pub fn print_rendered(rendered: &str) {
    if !rendered.is_empty() {
        println!("{rendered}");
    }
}

/// Print a message explaining an empty result (human format only)
pub fn print_empty(message: &str, format: OutputFormat) {
    if format == OutputFormat::Human {
        eprintln!("{}", colors::dim(message));
    }
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}
