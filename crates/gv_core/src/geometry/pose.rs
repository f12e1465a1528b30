//! Agent placement: a position plus the direction it faces.

use serde::{Deserialize, Serialize};

use super::{Area, Orientation, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pose {
    pub position: Position,
    pub orientation: Orientation,
}

impl Pose {
    pub fn new(position: Position, orientation: Orientation) -> Self {
        Self { position, orientation }
    }

    /// Absolute position of an offset given in the pose's own frame, where
    /// `(-1, 0)` is straight ahead.
    #[inline]
    pub fn absolute_position(&self, relative: Position) -> Position {
        self.position + relative.rotate(self.orientation)
    }

    /// The cell directly in front.
    #[inline]
    pub fn front_position(&self) -> Position {
        self.absolute_position(Orientation::N.as_position(1))
    }

    /// Absolute area of an area given in the pose's own frame.
    ///
    /// Rotates first and translates second; the two do not commute.
    pub fn absolute_area(&self, relative: Area) -> Area {
        relative.rotate(self.orientation).translate(self.position)
    }
}

// ========== Tests ==========
