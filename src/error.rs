//! Error types for pomodoro.

use thiserror::Error;

/// Errors produced by the pomodoro library.
///
/// Inside the timer engine every variant is recoverable: persistence and
/// capability failures are logged and the countdown carries on.
#[derive(Debug, Error)]
pub enum PomodoroError {
    /// Invalid or unreadable configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// SQLite failure.
    #[error("database error: {0}")]
    Database(String),

    /// Malformed persisted data.
    #[error("parse error: {0}")]
    Parse(String),

    /// Filesystem or terminal I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The user or platform refused a capability (e.g. notifications).
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// A capability is not present on this system.
    #[error("unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for PomodoroError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<rusqlite::Error> for PomodoroError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Database(e.to_string())
    }
}
