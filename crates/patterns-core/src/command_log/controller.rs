//! Radio controller: issues actions and keeps the undo stack

use std::rc::Rc;
use std::time::Instant;

use super::action::{Action, ActionKind};
use super::receiver::{HorizontalMovement, Shared, VerticalMovement};
use crate::errors::{PatternError, Result};
use crate::{log_op_end, log_op_error, log_op_start};

/// Outcome of a successful [`RadioController::issue`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Issued {
    /// The action ran and sits on the stack at `depth`
    Applied { depth: usize },
    /// Zero magnitude; nothing ran and nothing was pushed
    NoOp,
}

/// Issues [`Action`]s to connected receivers and remembers them for `home`
///
/// Invariant: reverting every action on the stack in LIFO order returns each
/// receiver to its state at the time the controller started issuing.
#[derive(Debug, Default)]
pub struct RadioController {
    horizontal: Option<Shared<dyn HorizontalMovement>>,
    vertical: Option<Shared<dyn VerticalMovement>>,
    actions: Vec<Action>,
}

impl RadioController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect (or replace) the receiver for move and rotate
    ///
    /// Actions already on the stack keep the receiver they were issued to.
    pub fn connect_horizontal(&mut self, receiver: Shared<dyn HorizontalMovement>) {
        tracing::debug!(capability = "horizontal", "receiver connected");
        self.horizontal = Some(receiver);
    }

    /// Connect (or replace) the receiver for rise
    pub fn connect_vertical(&mut self, receiver: Shared<dyn VerticalMovement>) {
        tracing::debug!(capability = "vertical", "receiver connected");
        self.vertical = Some(receiver);
    }

    /// Number of actions that `home` would revert
    pub fn depth(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Issue an action of `kind` with the given magnitude
    ///
    /// Binds the action to the connected receiver, applies it and pushes it
    /// onto the stack. A zero magnitude is accepted but leaves both the
    /// receiver and the stack untouched.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMagnitude` for NaN or infinite magnitudes, and
    /// `ReceiverNotConnected` when no receiver provides the capability `kind`
    /// needs. In both cases nothing changes and the caller may retry.
    pub fn issue(&mut self, kind: ActionKind, magnitude: f64) -> Result<Issued> {
        log_op_start!("issue", action = kind.as_str(), magnitude = magnitude);
        let start = Instant::now();

        let action = check_magnitude(kind, magnitude)
            .and_then(|()| self.bind(kind, magnitude))
            .map_err(|e| {
                log_op_error!(
                    "issue",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    action = kind.as_str(),
                    capability = kind.capability().as_str()
                );
                e
            })?;

        let issued = if magnitude == 0.0 {
            Issued::NoOp
        } else {
            action.apply();
            self.actions.push(action);
            Issued::Applied {
                depth: self.actions.len(),
            }
        };

        log_op_end!(
            "issue",
            duration_ms = start.elapsed().as_millis() as u64,
            action = kind.as_str(),
            stack_depth = self.actions.len()
        );

        Ok(issued)
    }

    /// Shorthand for `issue(ActionKind::Move, distance)`
    pub fn move_by(&mut self, distance: f64) -> Result<Issued> {
        self.issue(ActionKind::Move, distance)
    }

    /// Shorthand for `issue(ActionKind::Rotate, degrees)`
    pub fn rotate_by(&mut self, degrees: f64) -> Result<Issued> {
        self.issue(ActionKind::Rotate, degrees)
    }

    /// Shorthand for `issue(ActionKind::Rise, altitude)`
    pub fn rise_by(&mut self, altitude: f64) -> Result<Issued> {
        self.issue(ActionKind::Rise, altitude)
    }

    /// Revert every action on the stack, newest first
    ///
    /// Returns how many actions were reverted. Calling `home` on an empty
    /// stack is a no-op.
    pub fn home(&mut self) -> usize {
        log_op_start!("home", stack_depth = self.actions.len());
        let start = Instant::now();

        let mut reverted = 0;
        while let Some(action) = self.actions.pop() {
            action.revert();
            reverted += 1;
        }

        log_op_end!(
            "home",
            duration_ms = start.elapsed().as_millis() as u64,
            reverted = reverted
        );
        reverted
    }

    fn bind(&self, kind: ActionKind, magnitude: f64) -> Result<Action> {
        let action = match kind {
            ActionKind::Move => self.horizontal.as_ref().map(|receiver| Action::Move {
                distance: magnitude,
                receiver: Rc::clone(receiver),
            }),
            ActionKind::Rotate => self.horizontal.as_ref().map(|receiver| Action::Rotate {
                degrees: magnitude,
                receiver: Rc::clone(receiver),
            }),
            ActionKind::Rise => self.vertical.as_ref().map(|receiver| Action::Rise {
                altitude: magnitude,
                receiver: Rc::clone(receiver),
            }),
        };

        action.ok_or_else(|| PatternError::ReceiverNotConnected {
            action: kind.as_str().to_string(),
            capability: kind.capability().as_str().to_string(),
        })
    }
}

// A non-finite step cannot be undone by negation.
fn check_magnitude(kind: ActionKind, magnitude: f64) -> Result<()> {
    if magnitude.is_finite() {
        Ok(())
    } else {
        Err(PatternError::InvalidMagnitude {
            action: kind.as_str().to_string(),
            magnitude,
        })
    }
}
