//! Today's progress without opening the timer.

use chrono::{Local, NaiveDate};
use tracing::warn;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::PomodoroError;
use crate::focus::{sessions_today, DailySummary, MemoryStore, SessionStore, SqliteStore};
use crate::output::format_status;

/// Execute the status command against the default database.
///
/// A database that cannot be opened reads as zero sessions today.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn status(config: &Config, format: OutputFormat) -> Result<String, PomodoroError> {
    let today = Local::now().date_naive();
    match SqliteStore::new() {
        Ok(store) => status_with(&store, config, today, format),
        Err(e) => {
            warn!(error = %e, "session storage unavailable, reporting 0 sessions");
            status_with(&MemoryStore::new(), config, today, format)
        }
    }
}

/// Execute the status command against `store` as of `today`.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn status_with(
    store: &dyn SessionStore,
    config: &Config,
    today: NaiveDate,
    format: OutputFormat,
) -> Result<String, PomodoroError> {
    let (completed, _) = sessions_today(store, today);
    let summary = DailySummary::new(&config.timer, today, completed);
    format_status(&summary, format)
}
