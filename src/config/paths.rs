//! Path resolution for pomodoro configuration and data files.
//!
//! All pomodoro data is stored in `~/.pomodoro/`:
//! - `config.yaml` - Configuration file
//! - `pomodoro.db` - SQLite database holding the daily session record
//! - `pomodoro.log` - Log output of interactive sessions

use std::path::PathBuf;

use crate::error::PomodoroError;

/// Paths to pomodoro configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.pomodoro/`
    pub root: PathBuf,
    /// Config file: `~/.pomodoro/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.pomodoro/pomodoro.db`
    pub database: PathBuf,
    /// Log file: `~/.pomodoro/pomodoro.log`
    pub log_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PomodoroError> {
        let home = std::env::var("HOME").map_err(|_| {
            PomodoroError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".pomodoro")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("pomodoro.db"),
            log_file: root.join("pomodoro.log"),
            root,
        }
    }

    /// Ensure the root directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), PomodoroError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                PomodoroError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }

        Ok(())
    }
}
