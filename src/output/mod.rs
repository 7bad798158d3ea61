//! Output formatting for pomodoro.
//!
//! Command results are rendered either for a person (colored text) or for a
//! script (JSON).

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::PomodoroError;
use crate::focus::DailySummary;

pub use json::*;
pub use pretty::*;

/// Format a daily summary based on output format
///
/// # Errors
///
/// Returns `PomodoroError::Parse` if JSON serialization fails.
pub fn format_status(summary: &DailySummary, format: OutputFormat) -> Result<String, PomodoroError> {
    match format {
        OutputFormat::Pretty => Ok(format_status_pretty(summary)),
        OutputFormat::Json => format_status_json(summary),
    }
}

/// Format the configuration based on output format
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn format_config(config: &Config, format: OutputFormat) -> Result<String, PomodoroError> {
    match format {
        OutputFormat::Pretty => format_config_pretty(config),
        OutputFormat::Json => format_config_json(config),
    }
}
