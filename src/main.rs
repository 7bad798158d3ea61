use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use pomodoro::cli::args::{Cli, Commands};
use pomodoro::cli::commands;
use pomodoro::config::{Config, Paths};
use pomodoro::logging::{self, LogTarget};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Run);

    let target = if command == Commands::Run {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        LogTarget::File(paths.log_file)
    } else {
        LogTarget::Stderr
    };
    logging::init(cli.verbose, &target)?;

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)
            .with_context(|| format!("could not load {}", path.display()))?,
        None => Config::load().context("could not load configuration")?,
    };
    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match command {
        Commands::Run => commands::run(&config)?,
        Commands::Status => commands::status(&config, format)?,
        Commands::Config => commands::show_config(&config, format)?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
