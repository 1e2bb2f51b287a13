//! Info command
//!
//! Usage: patterns info <PATTERN>

use clap::Args;
use patterns_core::Catalogue;

#[derive(Debug, Args)]
pub struct InfoArgs {
    /// Pattern key or full name, e.g. `memento`
    pub pattern: String,
}

/// Execute info command
pub fn execute(args: InfoArgs) -> Result<(), Box<dyn std::error::Error>> {
    let catalogue = Catalogue::standard();
    let pattern = catalogue.find(&args.pattern)?;
    println!("{}", pattern.info());
    Ok(())
}
