//! Catalogue Tests
//!
//! Runs the demos end to end against an in-memory output handle.

mod common;

use patterns_core::catalogue::{Category, PatternInfo};
use patterns_core::{Catalogue, Pattern, PatternError, Result, RunContext};
use std::io::Write;

struct FailingPattern;

impl Pattern for FailingPattern {
    fn info(&self) -> PatternInfo {
        PatternInfo {
            key: "failing",
            name: "Failing Pattern",
            category: Category::Structural,
            description: "Always fails.",
        }
    }

    fn run(&self, _ctx: &mut RunContext<'_>) -> Result<()> {
        Err(PatternError::Io {
            message: "stdout closed".to_string(),
        })
    }
}

struct CountingPattern;

impl Pattern for CountingPattern {
    fn info(&self) -> PatternInfo {
        PatternInfo {
            key: "counting",
            name: "Counting Pattern",
            category: Category::Creational,
            description: "Writes one line.",
        }
    }

    fn run(&self, ctx: &mut RunContext<'_>) -> Result<()> {
        writeln!(ctx.out(), "counted")?;
        Ok(())
    }
}

#[test]
fn test_run_command_pattern_prints_header_and_scenarios() {
    let text = common::run_to_string(&Catalogue::standard(), "command", 42).unwrap();

    assert!(text.contains("Name: Command Pattern."));
    assert!(text.contains("Drone command execution example:"));
    assert!(text.contains("Car command execution example:"));
}

#[test]
fn test_run_memento_pattern_prints_both_players() {
    let text = common::run_to_string(&Catalogue::standard(), "memento", 42).unwrap();

    assert!(text.contains("Name: Memento Pattern."));
    assert!(text.contains("Fair player:"));
    assert!(text.contains("undo x2"));
    assert!(text.contains("Unfair player:"));
    assert!(text.contains("best_score = "));
}

#[test]
fn test_memento_output_depends_on_seed_only() {
    let catalogue = Catalogue::standard();
    let a = common::run_to_string(&catalogue, "memento", 9).unwrap();
    let b = common::run_to_string(&catalogue, "memento", 9).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_run_unknown_pattern() {
    let result = common::run_to_string(&Catalogue::standard(), "singleton", 42);
    assert_eq!(
        result,
        Err(PatternError::PatternNotFound {
            name: "singleton".to_string()
        })
    );
}

#[test]
fn test_run_all_runs_every_pattern_in_order() {
    let mut out = Vec::new();
    let mut ctx = RunContext::new(&mut out);

    let completed = Catalogue::standard().run_all(&mut ctx).unwrap();
    assert_eq!(completed, 2);

    let text = String::from_utf8(out).unwrap();
    let command_at = text.find("Name: Command Pattern.").unwrap();
    let memento_at = text.find("Name: Memento Pattern.").unwrap();
    assert!(command_at < memento_at);
}

#[test]
fn test_run_all_stops_at_first_failure() {
    let mut catalogue = Catalogue::new();
    catalogue.register(Box::new(CountingPattern));
    catalogue.register(Box::new(FailingPattern));
    catalogue.register(Box::new(CountingPattern));

    let mut out = Vec::new();
    let mut ctx = RunContext::new(&mut out);
    let result = catalogue.run_all(&mut ctx);

    assert!(matches!(result, Err(PatternError::Io { .. })));
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("counted").count(), 1);
}
