//! Reversible actions

use std::fmt;

use super::receiver::{HorizontalMovement, Shared, VerticalMovement};

/// Receiver capability an action needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Horizontal,
    Vertical,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Horizontal => "horizontal",
            Capability::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of action a controller can issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Move,
    Rotate,
    Rise,
}

impl ActionKind {
    pub const ALL: [ActionKind; 3] = [ActionKind::Move, ActionKind::Rotate, ActionKind::Rise];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Move => "move",
            ActionKind::Rotate => "rotate",
            ActionKind::Rise => "rise",
        }
    }

    /// Capability the receiver must provide for this action
    pub fn capability(&self) -> Capability {
        match self {
            ActionKind::Move | ActionKind::Rotate => Capability::Horizontal,
            ActionKind::Rise => Capability::Vertical,
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reversible unit of work bound to one receiver capability
///
/// The magnitude and target are fixed at construction. `revert` undoes
/// exactly what `apply` did, provided everything applied after it has
/// already been reverted.
#[derive(Debug, Clone)]
pub enum Action {
    Move {
        distance: f64,
        receiver: Shared<dyn HorizontalMovement>,
    },
    Rotate {
        degrees: f64,
        receiver: Shared<dyn HorizontalMovement>,
    },
    Rise {
        altitude: f64,
        receiver: Shared<dyn VerticalMovement>,
    },
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Move { .. } => ActionKind::Move,
            Action::Rotate { .. } => ActionKind::Rotate,
            Action::Rise { .. } => ActionKind::Rise,
        }
    }

    /// Distance, angle or altitude carried by the action
    pub fn magnitude(&self) -> f64 {
        match self {
            Action::Move { distance, .. } => *distance,
            Action::Rotate { degrees, .. } => *degrees,
            Action::Rise { altitude, .. } => *altitude,
        }
    }

    pub fn apply(&self) {
        match self {
            Action::Move { distance, receiver } => receiver.borrow_mut().move_by(*distance),
            Action::Rotate { degrees, receiver } => receiver.borrow_mut().rotate_by(*degrees),
            Action::Rise { altitude, receiver } => receiver.borrow_mut().rise_by(*altitude),
        }
    }

    pub fn revert(&self) {
        match self {
            Action::Move { distance, receiver } => receiver.borrow_mut().move_by(-*distance),
            Action::Rotate { degrees, receiver } => receiver.borrow_mut().rotate_by(-*degrees),
            Action::Rise { altitude, receiver } => receiver.borrow_mut().rise_by(-*altitude),
        }
    }
}
