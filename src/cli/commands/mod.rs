//! Command implementations for pomodoro.
//!
//! Each command returns the text to print; the interactive timer prints
//! nothing and owns the terminal while it runs.

mod completions;
mod config;
mod run;
mod status;

pub use completions::{completions, generate_completions};
pub use config::show_config;
pub use run::run;
pub use status::{status, status_with};
