//! Live profile, its snapshots, and the display view

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::errors::{PatternError, Result};

/// The live, mutable player profile
///
/// Holds no history of its own; see [`super::History`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerProfile {
    money: i64,
    best_score: u32,
    level: u32,
    experience: u32,
    games_played: u32,
}

impl PlayerProfile {
    pub fn new(starting_money: i64) -> Self {
        Self {
            money: starting_money,
            best_score: 0,
            level: 0,
            experience: 0,
            games_played: 0,
        }
    }

    pub fn money(&self) -> i64 {
        self.money
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Apply `delta` to the balance, leaving it untouched on overflow
    pub(crate) fn modify_money(&mut self, delta: i64) -> Result<()> {
        self.money = self
            .money
            .checked_add(delta)
            .ok_or(PatternError::BalanceOverflow {
                balance: self.money,
                delta,
            })?;
        Ok(())
    }

    pub(crate) fn update_best_score(&mut self, score: u32) {
        self.best_score = self.best_score.max(score);
    }

    /// Record a finished game and the experience it left the player with
    pub(crate) fn record_game(&mut self, experience: u32) {
        self.experience = experience;
        self.games_played = self.games_played.saturating_add(1);
    }

    /// Capture the current field values
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            money: self.money,
            best_score: self.best_score,
            level: self.level,
            experience: self.experience,
            games_played: self.games_played,
            taken_at: Utc::now(),
        }
    }
}

impl From<&Snapshot> for PlayerProfile {
    fn from(snapshot: &Snapshot) -> Self {
        Self {
            money: snapshot.money,
            best_score: snapshot.best_score,
            level: snapshot.level,
            experience: snapshot.experience,
            games_played: snapshot.games_played,
        }
    }
}

/// Immutable copy of a profile at one point in time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    money: i64,
    best_score: u32,
    level: u32,
    experience: u32,
    games_played: u32,
    taken_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn money(&self) -> i64 {
        self.money
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn taken_at(&self) -> DateTime<Utc> {
        self.taken_at
    }

    /// Whether this snapshot holds exactly the profile's current values
    pub fn matches(&self, profile: &PlayerProfile) -> bool {
        PlayerProfile::from(self) == *profile
    }
}

/// Structured view of a session for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileStats {
    pub best_score: u32,
    pub money: i64,
    pub level: u32,
    pub games_played: u32,
    pub experience: u32,
    pub saves: usize,
}

impl fmt::Display for ProfileStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "best_score = {}", self.best_score)?;
        writeln!(f, "money = {}", self.money)?;
        writeln!(f, "level = {}", self.level)?;
        writeln!(f, "games_played = {}", self.games_played)?;
        writeln!(f, "experience = {}", self.experience)?;
        write!(f, "saves = {}", self.saves)
    }
}
