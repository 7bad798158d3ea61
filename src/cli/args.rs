use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "pomodoro")]
#[command(about = "A pomodoro focus timer for the terminal")]
#[command(long_about = "pomodoro - a focus timer for the terminal

Work for 25 minutes, take a 5 minute break, and every fourth session
take a 15 minute break instead. The session count is kept per day.

QUICK START:
  pomodoro                  Open the timer
  pomodoro status           Show today's session count
  pomodoro config           Show the effective configuration

KEYS (in the timer):
  space   start / pause        r       reset
  w s l   work / short / long  e       edit label
  ?       help                 q       quit")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Path to the configuration file
    #[arg(long, global = true, env = "POMODORO_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive timer (default)
    Run,

    /// Show today's completed sessions and the next break
    #[command(alias = "st")]
    Status,

    /// Print the effective configuration
    Config,

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   pomodoro completions bash > ~/.local/share/bash-completion/completions/pomodoro
    ///   pomodoro completions zsh > ~/.zfunc/_pomodoro
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_to_timer() {
        let cli = Cli::try_parse_from(["pomodoro"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.output.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_status_json() {
        let cli = Cli::try_parse_from(["pomodoro", "status", "-o", "json"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Status));
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_verbosity_counts() {
        let cli = Cli::try_parse_from(["pomodoro", "-vv", "run"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.command, Some(Commands::Run));
    }

    #[test]
    fn test_cli_config_path() {
        let cli = Cli::try_parse_from(["pomodoro", "--config", "/tmp/p.yaml", "config"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/p.yaml")));
    }

    #[test]
    fn test_cli_completions_shell() {
        let cli = Cli::try_parse_from(["pomodoro", "completions", "zsh"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Completions { shell: Shell::Zsh })
        );
    }

    #[test]
    fn test_cli_rejects_unknown_shell() {
        assert!(Cli::try_parse_from(["pomodoro", "completions", "cmd"]).is_err());
    }

    #[test]
    fn test_cli_verify() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
