//! Compass orientations and their rotation algebra.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Position;
use crate::error::GridError;

/// One of the four cardinal directions, `N` being "up" (decreasing `y`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Orientation {
    N,
    S,
    E,
    W,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [Orientation::N, Orientation::S, Orientation::E, Orientation::W];

    /// Displacement of `dist` cells in this direction.
    #[inline]
    pub fn as_position(self, dist: i32) -> Position {
        match self {
            Orientation::N => Position::new(-dist, 0),
            Orientation::S => Position::new(dist, 0),
            Orientation::E => Position::new(0, dist),
            Orientation::W => Position::new(0, -dist),
        }
    }

    /// Counter-clockwise angle from north, used when rendering.
    pub fn as_radians(self) -> f64 {
        match self {
            Orientation::N => 0.0,
            Orientation::W => PI / 2.0,
            Orientation::S => PI,
            Orientation::E => PI * 3.0 / 2.0,
        }
    }

    pub fn rotate_left(self) -> Self {
        match self {
            Orientation::N => Orientation::W,
            Orientation::W => Orientation::S,
            Orientation::S => Orientation::E,
            Orientation::E => Orientation::N,
        }
    }

    pub fn rotate_right(self) -> Self {
        match self {
            Orientation::N => Orientation::E,
            Orientation::E => Orientation::S,
            Orientation::S => Orientation::W,
            Orientation::W => Orientation::N,
        }
    }

    pub fn rotate_back(self) -> Self {
        match self {
            Orientation::N => Orientation::S,
            Orientation::E => Orientation::W,
            Orientation::S => Orientation::N,
            Orientation::W => Orientation::E,
        }
    }

    /// The orientation whose rotation undoes `Position::rotate(self)`.
    ///
    /// Coincides with `rotate_back` for `E` and `W`; `N` and `S` are their
    /// own inverses.
    pub fn inverse(self) -> Self {
        match self {
            Orientation::N => Orientation::N,
            Orientation::S => Orientation::S,
            Orientation::E => Orientation::W,
            Orientation::W => Orientation::E,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Orientation::N => "N",
            Orientation::S => "S",
            Orientation::E => "E",
            Orientation::W => "W",
        };
        f.write_str(name)
    }
}

impl FromStr for Orientation {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "N" | "NORTH" => Ok(Orientation::N),
            "S" | "SOUTH" => Ok(Orientation::S),
            "E" | "EAST" => Ok(Orientation::E),
            "W" | "WEST" => Ok(Orientation::W),
            _ => Err(GridError::InvalidArgument(format!("unknown orientation '{}'", s))),
        }
    }
}

// ========== Tests ==========
