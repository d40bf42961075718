//! Output formatting for CLI commands
//!
//! Three severities mirror the command output sink: success on stdout,
//! warning and error on stderr. Colors respect the NO_COLOR env var.

use crate::cli::OutputFormat;
use crate::core::error::{IndexCfgError, Result};
use serde::Serialize;

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for labels/headers
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for identifiers (application IDs, index names)
    pub fn identifier(s: &str) -> ColoredString {
        s.cyan()
    }

    /// Style for success messages
    pub fn success(s: &str) -> ColoredString {
        s.green().bold()
    }

    /// Style for warning messages
    pub fn warning(s: &str) -> ColoredString {
        s.yellow().bold()
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

/// Success line, e.g. `Success: Copied settings from a to b`
pub fn success_line(message: &str) -> String {
    format!("{}: {}", colors::success("Success"), message)
}

/// Warning line
pub fn warning_line(message: &str) -> String {
    format!("{}: {}", colors::warning("Warning"), message)
}

/// Error line
pub fn error_line(message: &str) -> String {
    format!("{}: {}", colors::error("Error"), message)
}

/// Print output based on format
///
/// Human output for structured data is handled by the caller.
pub fn print_output<T: serde::Serialize>(data: &T, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => Ok(()),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data)?);
            Ok(())
        }
    }
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{}", success_line(message));
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{}", warning_line(message));
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}", error_line(message));
}

/// JSON shape of a failed command
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub kind: &'static str,
    pub message: String,
}

impl From<&IndexCfgError> for ErrorResponse {
    fn from(err: &IndexCfgError) -> Self {
        Self {
            status: "error",
            kind: err.kind(),
            message: err.message(),
        }
    }
}

/// Report a failed command in the requested format
///
/// JSON goes to stdout next to regular JSON output; the exit code still
/// signals the failure.
pub fn print_failure(err: &IndexCfgError, format: OutputFormat) {
    match format {
        OutputFormat::Human => print_error(&err.message()),
        OutputFormat::Json => match serde_json::to_string_pretty(&ErrorResponse::from(err)) {
            Ok(json) => println!("{json}"),
            Err(_) => print_error(&err.message()),
        },
    }
}

/// Print a header/title
pub fn print_header(title: &str) {
    println!("{}", colors::label(title));
}
