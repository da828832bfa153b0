use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use pomo::cli::args::{Cli, Commands};
use pomo::cli::commands;
use pomo::config::Config;
use pomo::error::PomoError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), PomoError> {
    let cli = Cli::parse();
    let format = cli.output;

    // No subcommand launches the timer directly.
    let output = match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            let config = Config::load()?;
            pomo::tui::run(&config)?;
            String::new()
        }
        Commands::Config(args) => commands::config(args.command, format)?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
