//! Run command
//!
//! Usage: patterns run [PATTERN] [--all] [--seed N]
//!
//! Without a pattern the whole catalogue runs, in order.

use clap::Args;
use patterns_core::memento_log::DEFAULT_SEED;
use patterns_core::{Catalogue, RunContext};
use std::io::Write;

use crate::config::Settings;

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Pattern key or full name
    #[arg(conflicts_with = "all")]
    pub pattern: Option<String>,

    /// Run every pattern in the catalogue
    #[arg(long)]
    pub all: bool,

    /// Seed for the dice (overrides the settings file)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Execute run command
pub fn execute(args: RunArgs, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let seed = args.seed.or(settings.seed).unwrap_or(DEFAULT_SEED);
    let catalogue = Catalogue::standard();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut ctx = RunContext::new(&mut out)
        .with_seed(seed)
        .with_memento_config(settings.memento.clone());

    match args.pattern {
        Some(name) => catalogue.run(&name, &mut ctx)?,
        None => {
            let completed = catalogue.run_all(&mut ctx)?;
            tracing::info!(patterns = completed, seed, "catalogue run complete");
        }
    }

    out.flush()?;
    Ok(())
}
