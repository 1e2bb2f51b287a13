//! Pattern catalogue
//!
//! Every demo implements [`Pattern`]: static [`PatternInfo`] plus a `run`
//! that writes its narration to the output handle carried by
//! [`RunContext`]. The [`Catalogue`] keeps them in presentation order and
//! wraps each run in a span tagged with a fresh [`RunId`].

pub mod command_demo;
pub mod memento_demo;

use patterns_core_types::RunId;
use std::fmt;
use std::io::Write;
use std::time::Instant;

use crate::errors::{PatternError, Result};
use crate::memento_log::DEFAULT_SEED;
use crate::{log_op_end, log_op_error, log_op_start};

pub use command_demo::CommandPattern;
pub use memento_demo::{MementoDemoConfig, MementoPattern};

/// Pattern family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Creational,
    Behavioral,
    Structural,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Creational => "Creational",
            Category::Behavioral => "Behavioral",
            Category::Structural => "Structural",
        };
        f.pad(name)
    }
}

/// Descriptive metadata for one pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternInfo {
    /// Short lookup key, e.g. `command`
    pub key: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub description: &'static str,
}

impl fmt::Display for PatternInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}.", self.name)?;
        writeln!(f, "Type: {}.", self.category)?;
        write!(f, "Description: {}", self.description)
    }
}

/// Everything a run needs from its caller
///
/// The output handle is passed in explicitly; patterns never print to
/// stdout on their own.
pub struct RunContext<'a> {
    out: &'a mut dyn Write,
    run_id: RunId,
    seed: u64,
    memento: MementoDemoConfig,
}

impl<'a> RunContext<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        Self {
            out,
            run_id: RunId::new(),
            seed: DEFAULT_SEED,
            memento: MementoDemoConfig::default(),
        }
    }

    /// Seed for any randomness a demo uses
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_memento_config(mut self, config: MementoDemoConfig) -> Self {
        self.memento = config;
        self
    }

    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }

    pub fn run_id(&self) -> &RunId {
        &self.run_id
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn memento(&self) -> &MementoDemoConfig {
        &self.memento
    }

    fn next_run(&mut self) {
        self.run_id = RunId::new();
    }
}

/// A self-contained pattern demo
pub trait Pattern {
    fn info(&self) -> PatternInfo;

    /// Run the demo, narrating to `ctx.out()`
    ///
    /// # Errors
    ///
    /// Returns an error only if the demo cannot complete, e.g. the output
    /// handle fails. Expected precondition failures inside the demo are
    /// narrated, not returned.
    fn run(&self, ctx: &mut RunContext<'_>) -> Result<()>;
}

/// Ordered registry of pattern demos
#[derive(Default)]
pub struct Catalogue {
    patterns: Vec<Box<dyn Pattern>>,
}

impl Catalogue {
    /// An empty catalogue
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalogue with every implemented pattern, in presentation order
    pub fn standard() -> Self {
        let mut catalogue = Self::new();
        catalogue.register(Box::new(CommandPattern));
        catalogue.register(Box::new(MementoPattern));
        catalogue
    }

    pub fn register(&mut self, pattern: Box<dyn Pattern>) {
        self.patterns.push(pattern);
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Pattern> {
        self.patterns.iter().map(|p| p.as_ref())
    }

    /// Look a pattern up by key or full name, ignoring case
    ///
    /// # Errors
    ///
    /// Returns `PatternNotFound` when nothing matches.
    pub fn find(&self, name: &str) -> Result<&dyn Pattern> {
        let wanted = name.trim();
        self.iter()
            .find(|p| {
                let info = p.info();
                info.key.eq_ignore_ascii_case(wanted) || info.name.eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| PatternError::PatternNotFound {
                name: name.to_string(),
            })
    }

    /// Find and run one pattern
    ///
    /// # Errors
    ///
    /// Returns `PatternNotFound` or whatever the pattern's run returns.
    pub fn run(&self, name: &str, ctx: &mut RunContext<'_>) -> Result<()> {
        let pattern = self.find(name)?;
        run_pattern(pattern, ctx)
    }

    /// Run every pattern in order, stopping at the first failure
    ///
    /// Returns the number of patterns that ran to completion.
    ///
    /// # Errors
    ///
    /// Returns the first error any pattern reports.
    pub fn run_all(&self, ctx: &mut RunContext<'_>) -> Result<usize> {
        let mut completed = 0;
        for pattern in self.iter() {
            ctx.next_run();
            run_pattern(pattern, ctx)?;
            completed += 1;
        }
        Ok(completed)
    }
}

fn run_pattern(pattern: &dyn Pattern, ctx: &mut RunContext<'_>) -> Result<()> {
    let info = pattern.info();
    let span = tracing::info_span!("pattern_run", pattern = info.key, run_id = %ctx.run_id());
    let _guard = span.enter();

    log_op_start!("run", pattern = info.key);
    let start = Instant::now();

    let result = writeln!(ctx.out(), "\n{}\n", info)
        .map_err(PatternError::from)
        .and_then(|()| pattern.run(ctx));

    match &result {
        Ok(()) => {
            log_op_end!(
                "run",
                duration_ms = start.elapsed().as_millis() as u64,
                pattern = info.key
            );
        }
        Err(e) => {
            log_op_error!(
                "run",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                pattern = info.key
            );
        }
    }
    result
}
