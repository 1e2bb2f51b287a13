//! Game session: live profile, round rules and the snapshot history

use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::dice::{Dice, MAX_ROLL};
use super::history::History;
use super::profile::{PlayerProfile, ProfileStats};
use crate::errors::{PatternError, Result};
use crate::{log_op_end, log_op_error, log_op_start};

/// Pricing and payout rules for one round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameRules {
    /// Money deducted before each round
    pub round_price: i64,
    /// Money a fresh profile starts with
    pub starting_money: i64,
    /// A roll strictly above this wins
    pub win_threshold: u32,
    /// Payout on a win, as a multiple of the round price
    pub payout_multiplier: f64,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            round_price: 10,
            starting_money: 100,
            win_threshold: 50,
            payout_multiplier: 1.5,
        }
    }
}

impl GameRules {
    /// Money credited after a winning round
    pub fn payout(&self) -> i64 {
        (self.round_price as f64 * self.payout_multiplier) as i64
    }

    /// Money credited after a losing round
    pub fn refund(&self) -> i64 {
        self.round_price / 2
    }

    /// # Errors
    ///
    /// Returns `InvalidConfig` naming the first unusable field.
    pub fn validate(&self) -> Result<()> {
        if self.round_price <= 0 {
            return Err(PatternError::InvalidConfig {
                reason: format!("round_price must be positive, got {}", self.round_price),
            });
        }
        if self.starting_money < 0 {
            return Err(PatternError::InvalidConfig {
                reason: format!(
                    "starting_money must not be negative, got {}",
                    self.starting_money
                ),
            });
        }
        if self.win_threshold > MAX_ROLL {
            return Err(PatternError::InvalidConfig {
                reason: format!(
                    "win_threshold must be at most {}, got {}",
                    MAX_ROLL, self.win_threshold
                ),
            });
        }
        if !self.payout_multiplier.is_finite() || self.payout_multiplier < 0.0 {
            return Err(PatternError::InvalidConfig {
                reason: format!(
                    "payout_multiplier must be a non-negative number, got {}",
                    self.payout_multiplier
                ),
            });
        }
        if self.starting_money.checked_add(self.payout()).is_none() {
            return Err(PatternError::InvalidConfig {
                reason: format!(
                    "starting_money {} leaves no room for a payout of {}",
                    self.starting_money,
                    self.payout()
                ),
            });
        }
        Ok(())
    }
}

/// Result of one accepted round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundOutcome {
    pub roll: u32,
    pub won: bool,
    /// Money after the round settled
    pub money: i64,
}

/// A player profile with manual checkpointing
///
/// Invariant: the history always holds at least the snapshot taken at
/// construction, so `reload` always has something to restore.
#[derive(Debug)]
pub struct GameSession<D: Dice> {
    rules: GameRules,
    profile: PlayerProfile,
    history: History,
    dice: D,
}

impl<D: Dice> GameSession<D> {
    /// Start a fresh profile and seed the history with it
    pub fn new(rules: GameRules, dice: D) -> Self {
        let profile = PlayerProfile::new(rules.starting_money);
        let history = History::new(profile.snapshot());
        Self {
            rules,
            profile,
            history,
            dice,
        }
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// The live profile
    pub fn profile(&self) -> &PlayerProfile {
        &self.profile
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Append a snapshot of the live profile to the history
    pub fn save(&mut self) {
        self.history.push(self.profile.snapshot());
        tracing::debug!(
            history_len = self.history.len(),
            money = self.profile.money(),
            "profile saved"
        );
    }

    /// Replace the live profile with the most recent snapshot
    pub fn reload(&mut self) {
        self.profile = PlayerProfile::from(self.history.latest());
        tracing::debug!(
            history_len = self.history.len(),
            money = self.profile.money(),
            "profile reloaded"
        );
    }

    /// Drop the most recent snapshot and reload the one before it
    ///
    /// Returns `false`, changing nothing, when only the initial snapshot is
    /// left.
    pub fn undo(&mut self) -> bool {
        log_op_start!("undo", history_len = self.history.len());
        let start = Instant::now();

        let undone = self.history.pop_latest().is_some();
        if undone {
            self.reload();
        }

        log_op_end!(
            "undo",
            duration_ms = start.elapsed().as_millis() as u64,
            undone = undone,
            history_len = self.history.len()
        );
        undone
    }

    /// Play one round
    ///
    /// Deducts the round price, rolls, then credits the payout on a win or
    /// the refund on a loss. Experience is set to half the roll. Nothing is
    /// saved; call [`save`](Self::save) to checkpoint the result.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientFunds` when money is below the round price, and
    /// `BalanceOverflow` when the settled balance would not fit in an `i64`.
    /// Either way the profile is left unchanged.
    pub fn play(&mut self) -> Result<RoundOutcome> {
        log_op_start!("play", money = self.profile.money());
        let start = Instant::now();

        let outcome = self.play_impl().map_err(|e| {
            log_op_error!(
                "play",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            "play",
            duration_ms = start.elapsed().as_millis() as u64,
            roll = outcome.roll,
            won = outcome.won,
            money = outcome.money
        );
        Ok(outcome)
    }

    fn play_impl(&mut self) -> Result<RoundOutcome> {
        if self.is_exhausted() {
            return Err(PatternError::InsufficientFunds {
                required: self.rules.round_price,
                available: self.profile.money(),
            });
        }
        let roll = self.dice.roll();
        let won = roll > self.rules.win_threshold;
        let credit = if won {
            self.rules.payout()
        } else {
            self.rules.refund()
        };

        // Price and credit settle together; nothing is touched if that overflows.
        self.profile.modify_money(credit - self.rules.round_price)?;
        self.profile.update_best_score(roll);
        self.profile.record_game(roll / 2);

        Ok(RoundOutcome {
            roll,
            won,
            money: self.profile.money(),
        })
    }

    /// Whether the live profile can no longer afford a round
    pub fn is_exhausted(&self) -> bool {
        self.profile.money() < self.rules.round_price
    }

    pub fn stats(&self) -> ProfileStats {
        ProfileStats {
            best_score: self.profile.best_score(),
            money: self.profile.money(),
            level: self.profile.level(),
            games_played: self.profile.games_played(),
            experience: self.profile.experience(),
            saves: self.history.len(),
        }
    }
}
