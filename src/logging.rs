//! Tracing setup.
//!
//! The interactive timer owns the terminal, so it logs to a file. Every other
//! command logs to stderr. `RUST_LOG` overrides the verbosity flags.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::PomodoroError;

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Write to standard error.
    Stderr,
    /// Append to a file, without ANSI colors.
    File(PathBuf),
}

/// Default filter directive for a `-v` count.
#[must_use]
pub fn directive(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("pomodoro={level}")
}

/// Install the global subscriber.
///
/// Installing twice is not an error; the first subscriber stays.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init(verbosity: u8, target: &LogTarget) -> Result<(), PomodoroError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive(verbosity)));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    if installed.is_err() {
        tracing::debug!("subscriber already installed");
    }
    Ok(())
}
