//! Configuration settings for pomodoro.
//!
//! Settings are loaded once from `~/.pomodoro/config.yaml` and stay fixed for
//! the lifetime of the process.

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::PomodoroError;
use crate::focus::Mode;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Countdown durations.
    pub timer: TimerConfig,
    /// Completion alerts.
    pub alerts: AlertConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Terminal title restored whenever the timer is not running.
    #[serde(default = "default_title")]
    pub title: String,
}

/// Mode durations and the long-break cadence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimerConfig {
    /// Work session length in minutes.
    #[serde(default = "default_work")]
    pub work_minutes: u32,
    /// Short break length in minutes.
    #[serde(default = "default_short_break")]
    pub short_break_minutes: u32,
    /// Long break length in minutes.
    #[serde(default = "default_long_break")]
    pub long_break_minutes: u32,
    /// Every Nth completed work session is followed by a long break.
    #[serde(default = "default_long_break_interval")]
    pub long_break_interval: u32,
}

/// Completion alert settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AlertConfig {
    /// Show desktop notifications.
    #[serde(default = "default_true")]
    pub notifications: bool,
    /// Play a tone.
    #[serde(default = "default_true")]
    pub sound: bool,
    /// Raw PCM player fed with the tone (`aplay`-compatible flags).
    #[serde(default = "default_player")]
    pub player: String,
}

const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

fn default_title() -> String {
    "pomodoro".to_string()
}

const fn default_work() -> u32 {
    25
}

const fn default_short_break() -> u32 {
    5
}

const fn default_long_break() -> u32 {
    15
}

const fn default_long_break_interval() -> u32 {
    4
}

const fn default_true() -> bool {
    true
}

fn default_player() -> String {
    "aplay".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            title: default_title(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_minutes: default_work(),
            short_break_minutes: default_short_break(),
            long_break_minutes: default_long_break(),
            long_break_interval: default_long_break_interval(),
        }
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            notifications: default_true(),
            sound: default_true(),
            player: default_player(),
        }
    }
}

impl TimerConfig {
    /// Duration of `mode` in minutes.
    #[must_use]
    pub const fn minutes(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Work => self.work_minutes,
            Mode::Short => self.short_break_minutes,
            Mode::Long => self.long_break_minutes,
        }
    }

    /// Duration of `mode` in seconds.
    #[must_use]
    pub const fn seconds(&self, mode: Mode) -> u32 {
        self.minutes(mode).saturating_mul(60)
    }

    /// The break that follows the `completed`th work session.
    #[must_use]
    pub const fn break_after(&self, completed: u32) -> Mode {
        if matches!(completed.checked_rem(self.long_break_interval), Some(0)) {
            Mode::Long
        } else {
            Mode::Short
        }
    }

    /// Reject durations or cadences of zero.
    ///
    /// # Errors
    ///
    /// Returns `PomodoroError::Config` naming the first offending field.
    pub fn validate(&self) -> Result<(), PomodoroError> {
        let fields = [
            ("work_minutes", self.work_minutes),
            ("short_break_minutes", self.short_break_minutes),
            ("long_break_minutes", self.long_break_minutes),
            ("long_break_interval", self.long_break_interval),
        ];

        for (name, value) in fields {
            if value == 0 {
                return Err(PomodoroError::Config(format!(
                    "timer.{name} must be at least 1"
                )));
            }
        }

        Ok(())
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed or is
    /// invalid.
    pub fn load() -> Result<Self, PomodoroError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed or is
    /// invalid.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, PomodoroError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PomodoroError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            PomodoroError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;

        config.timer.validate()?;
        Ok(config)
    }
}
