//! Command Log: reversible actions issued against movable receivers
//!
//! A [`RadioController`] turns requests like "move 98" into [`Action`]s bound
//! to whichever receiver capability is connected, applies them immediately and
//! keeps them on a LIFO stack. [`RadioController::home`] reverts the whole
//! stack, returning every receiver to where it was before the first issue.
//!
//! Receivers are built by composition: an [`RcDrone`] owns a horizontal and a
//! vertical capability, an [`RcCar`] only a horizontal one. Actions target the
//! capability trait, never the concrete vehicle.

pub mod action;
pub mod controller;
pub mod receiver;

pub use action::{Action, ActionKind, Capability};
pub use controller::{Issued, RadioController};
pub use receiver::{
    shared, HorizontalMovement, HorizontalMover, RcCar, RcDrone, Shared, VerticalMovement,
    VerticalMover,
};
