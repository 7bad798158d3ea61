//! JSON output formatting for pomodoro.

use serde::Serialize;

use crate::config::Config;
use crate::error::PomodoroError;
use crate::focus::DailySummary;

/// Serialize any value as pretty JSON.
///
/// # Errors
///
/// Returns `PomodoroError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, PomodoroError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Format a daily summary as JSON
///
/// # Errors
///
/// Returns `PomodoroError::Parse` if JSON serialization fails.
pub fn format_status_json(summary: &DailySummary) -> Result<String, PomodoroError> {
    to_json(summary)
}

/// Format the configuration as JSON
///
/// # Errors
///
/// Returns `PomodoroError::Parse` if JSON serialization fails.
pub fn format_config_json(config: &Config) -> Result<String, PomodoroError> {
    to_json(config)
}
