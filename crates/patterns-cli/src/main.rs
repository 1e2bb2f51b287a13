//! Patterns CLI
//!
//! Command-line interface for the design pattern demos

use clap::{Parser, Subcommand};
use patterns_core::logging_facility::{self, LogProfile};
use std::path::PathBuf;

mod commands;
mod config;

use config::Settings;

#[derive(Debug, Parser)]
#[command(name = "patterns")]
#[command(about = "Patterns - runnable design pattern demos", long_about = None)]
struct Cli {
    /// TOML settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log profile: dev, prod or quiet (overrides the settings file)
    #[arg(long, global = true)]
    log_profile: Option<LogProfile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List every pattern in the catalogue
    List,
    /// Describe one pattern
    Info(commands::info::InfoArgs),
    /// Run one pattern demo, or all of them
    Run(commands::run::RunArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = dispatch(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    let profile = cli
        .log_profile
        .or(settings.log_profile)
        .unwrap_or_default();
    logging_facility::init(profile);

    match cli.command {
        Commands::List => commands::list::execute(),
        Commands::Info(args) => commands::info::execute(args),
        Commands::Run(args) => commands::run::execute(args, &settings),
    }
}
