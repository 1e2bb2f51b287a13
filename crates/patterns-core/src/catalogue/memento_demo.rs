//! Memento pattern demo: a fair player and a save-scumming one

use serde::{Deserialize, Serialize};
use std::io::Write;

use super::{Category, Pattern, PatternInfo, RunContext};
use crate::errors::{PatternError, Result};
use crate::memento_log::{Dice, GameRules, GameSession, SeededDice};

/// Sizes and rules for the memento demo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MementoDemoConfig {
    pub rules: GameRules,
    /// Rounds per fair-play stretch
    pub fair_rounds: u32,
    /// Wins the save-scummer plays for
    pub scum_wins: u32,
    /// Hard cap on save-scum rounds, so unlucky seeds still terminate
    pub max_attempts: u32,
}

impl Default for MementoDemoConfig {
    fn default() -> Self {
        Self {
            rules: GameRules::default(),
            fair_rounds: 20,
            scum_wins: 40,
            max_attempts: 10_000,
        }
    }
}

impl MementoDemoConfig {
    /// # Errors
    ///
    /// Returns `InvalidConfig` for bad rules or a zero attempt cap.
    pub fn validate(&self) -> Result<()> {
        self.rules.validate()?;
        if self.max_attempts == 0 {
            return Err(PatternError::InvalidConfig {
                reason: "max_attempts must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

pub struct MementoPattern;

impl Pattern for MementoPattern {
    fn info(&self) -> PatternInfo {
        PatternInfo {
            key: "memento",
            name: "Memento Pattern",
            category: Category::Behavioral,
            description: "The Memento pattern allows capturing and storing an object's state \
                so it can be restored to that state at a later time without violating \
                encapsulation.",
        }
    }

    fn run(&self, ctx: &mut RunContext<'_>) -> Result<()> {
        let config = ctx.memento().clone();
        config.validate()?;
        let seed = ctx.seed();
        let out = ctx.out();

        let mut fair = GameSession::new(config.rules.clone(), SeededDice::from_seed_u64(seed));
        fair_player(out, &mut fair, config.fair_rounds)?;

        let mut scummer = GameSession::new(
            config.rules.clone(),
            SeededDice::from_seed_u64(seed.wrapping_add(1)),
        );
        save_scum_player(out, &mut scummer, config.scum_wins, config.max_attempts)?;
        Ok(())
    }
}

/// Play a stretch of rounds, saving after each win
///
/// Stops early when the profile can no longer afford a round. Returns the
/// number of rounds played.
pub fn play_stretch<D: Dice>(session: &mut GameSession<D>, rounds: u32) -> u32 {
    let mut played = 0;
    while played < rounds && !session.is_exhausted() {
        match session.play() {
            Ok(outcome) => {
                if outcome.won {
                    session.save();
                }
            }
            Err(_) => break,
        }
        played += 1;
    }
    played
}

fn fair_player<D: Dice>(
    out: &mut dyn Write,
    session: &mut GameSession<D>,
    rounds: u32,
) -> Result<()> {
    writeln!(out, "Fair player:")?;

    let played = play_stretch(session, rounds);
    writeln!(out, "played {} round(s)\n{}", played, session.stats())?;

    let undone = [session.undo(), session.undo()]
        .iter()
        .filter(|undone| **undone)
        .count();
    writeln!(out, "undo x2: rolled back {} save(s)", undone)?;

    let played = play_stretch(session, rounds);
    writeln!(out, "played {} round(s)\n{}", played, session.stats())?;
    Ok(())
}

fn save_scum_player<D: Dice>(
    out: &mut dyn Write,
    session: &mut GameSession<D>,
    wins: u32,
    max_attempts: u32,
) -> Result<()> {
    writeln!(out, "\nUnfair player:")?;

    let mut won = 0;
    let mut attempts = 0;
    while won < wins && attempts < max_attempts {
        attempts += 1;
        match session.play() {
            Ok(outcome) if outcome.won => {
                session.save();
                won += 1;
            }
            Ok(_) => session.reload(),
            Err(e) if e.kind().is_recoverable() => {
                writeln!(out, "{}", e)?;
                session.reload();
            }
            Err(e) => {
                writeln!(out, "{}", e)?;
                break;
            }
        }
    }

    writeln!(
        out,
        "won {} of {} round(s), reloading after every loss\n{}",
        won,
        attempts,
        session.stats()
    )?;
    Ok(())
}
