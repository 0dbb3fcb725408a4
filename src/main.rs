use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use restbell::cli::args::{Cli, Commands};
use restbell::cli::commands;
use restbell::config::Config;
use restbell::error::RestbellError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), RestbellError> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command {
        Commands::Remind(args) => commands::remind(&config, args.command, format)?,
        Commands::Tui => {
            restbell::tui::run(&config)?;
            String::new()
        }
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
