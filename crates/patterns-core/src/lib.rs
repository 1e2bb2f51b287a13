//! Patterns Core - design pattern demos with real state management
//!
//! This crate provides:
//! - The Command Log: reversible actions on composed receivers, with a
//!   LIFO undo stack that `home` unwinds completely
//! - The Memento Log: caller-driven snapshots of a player profile, with
//!   `save`, `reload` and `undo`
//! - The pattern catalogue that runs each demo against an injected output
//! - Error and logging facilities shared by the above

pub mod catalogue;
pub mod command_log;
pub mod errors;
pub mod logging_facility;
pub mod memento_log;

pub use patterns_core_types::schema;

// Re-export commonly used types
pub use catalogue::{Catalogue, Pattern, PatternInfo, RunContext};
pub use command_log::{ActionKind, Issued, RadioController};
pub use errors::{ExError, ExErrorKind, PatternError, Result};
pub use memento_log::{GameRules, GameSession};
