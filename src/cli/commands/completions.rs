//! Shell completions generation.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::PomodoroError;

/// Execute the completions command.
///
/// # Errors
///
/// Returns an error if the script is not valid UTF-8.
pub fn completions(shell: Shell) -> Result<String, PomodoroError> {
    generate_completions(shell).map(|script| script.trim_end().to_string())
}

/// Generate the completion script for `shell`.
///
/// # Errors
///
/// Returns an error if the script is not valid UTF-8.
pub fn generate_completions(shell: Shell) -> Result<String, PomodoroError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    generate_to(&mut buf, shell, &mut cmd);
    String::from_utf8(buf).map_err(|e| PomodoroError::Parse(format!("UTF-8 error: {e}")))
}

fn generate_to<W: Write>(buf: &mut W, shell: Shell, cmd: &mut clap::Command) {
    clap_complete::generate(shell, cmd, "pomodoro", buf);
}
