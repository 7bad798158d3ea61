//! Print the effective configuration.

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::PomodoroError;
use crate::output::format_config;

/// Execute the config command.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn show_config(config: &Config, format: OutputFormat) -> Result<String, PomodoroError> {
    format_config(config, format)
}
