//! Memento Log: caller-driven snapshots of a player profile
//!
//! A [`GameSession`] owns the live [`PlayerProfile`] and a [`History`] of
//! immutable [`Snapshot`]s. Rounds mutate only the live profile; the caller
//! decides when to `save`. `undo` drops the newest snapshot and restores the
//! one before it, `reload` restores the newest without dropping anything.

pub mod dice;
pub mod history;
pub mod profile;
pub mod session;

pub use dice::{Dice, LoadedDice, SeededDice, DEFAULT_SEED, MAX_ROLL};
pub use history::History;
pub use profile::{PlayerProfile, ProfileStats, Snapshot};
pub use session::{GameRules, GameSession, RoundOutcome};
