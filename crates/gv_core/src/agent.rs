//! The single oriented agent living on a grid.

use serde::{Deserialize, Serialize};

use crate::geometry::{Area, Orientation, Pose, Position};
use crate::objects::GridObject;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Agent {
    pub position: Position,
    pub orientation: Orientation,
    /// What the agent carries; `GridObject::None` when empty-handed.
    pub held: GridObject,
}

impl Agent {
    pub fn new(position: Position, orientation: Orientation) -> Self {
        Self { position, orientation, held: GridObject::None }
    }

    pub fn with_held(mut self, held: GridObject) -> Self {
        self.held = held;
        self
    }

    #[inline]
    pub fn pose(&self) -> Pose {
        Pose::new(self.position, self.orientation)
    }

    /// Absolute position of an offset in the agent's frame (`(-1, 0)` is
    /// the cell ahead, `(0, 1)` the cell to its right).
    pub fn position_relative(&self, relative: Position) -> Position {
        self.pose().absolute_position(relative)
    }

    pub fn position_in_front(&self) -> Position {
        self.pose().front_position()
    }

    /// Absolute area covered by a point-of-view area given in the agent's
    /// frame.
    pub fn pov_area(&self, relative: Area) -> Area {
        self.pose().absolute_area(relative)
    }

    pub fn is_holding(&self) -> bool {
        self.held != GridObject::None
    }
}

// ========== Tests ==========
