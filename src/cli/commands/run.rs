//! The interactive timer.

use crate::config::Config;
use crate::error::PomodoroError;
use crate::focus::{self, SystemClock, TimerEngine};
use crate::tui;

/// Open the full-screen timer and block until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn to.
pub fn run(config: &Config) -> Result<String, PomodoroError> {
    let engine = TimerEngine::new(
        config.timer,
        SystemClock::new(),
        focus::collaborators(config),
        config.general.title.clone(),
    );
    tui::run(engine)?;
    Ok(String::new())
}
