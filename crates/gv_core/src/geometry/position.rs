//! Grid cell addresses in matrix convention (row `y`, column `x`).

use std::fmt;
use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

use super::Orientation;

/// Cell address or offset: `y` is the row, `x` the column.
///
/// The same type is used for absolute positions and for offsets relative to
/// a pose; which one is meant follows from context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub y: i32,
    pub x: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { y: 0, x: 0 };

    #[inline]
    pub const fn new(y: i32, x: i32) -> Self {
        Self { y, x }
    }

    /// Rotates an offset into the frame of someone facing `orientation`.
    ///
    /// `N` is the identity and `S` a half turn. `E` maps the forward offset
    /// `(-1, 0)` onto `(0, 1)` and `W` maps it onto `(0, -1)`.
    #[inline]
    pub fn rotate(self, orientation: Orientation) -> Self {
        match orientation {
            Orientation::N => self,
            Orientation::S => Self::new(-self.y, -self.x),
            Orientation::E => Self::new(self.x, -self.y),
            Orientation::W => Self::new(-self.x, self.y),
        }
    }

    #[inline]
    pub fn manhattan_distance(self, other: Self) -> i32 {
        let diff = self - other;
        diff.y.abs() + diff.x.abs()
    }

    /// Chebyshev (king-move) distance.
    #[inline]
    pub fn chebyshev_distance(self, other: Self) -> i32 {
        let diff = self - other;
        diff.y.abs().max(diff.x.abs())
    }

    #[inline]
    pub fn euclidean_distance(self, other: Self) -> f64 {
        let diff = self - other;
        f64::from(diff.y).hypot(f64::from(diff.x))
    }

    #[inline]
    pub fn as_tuple(self) -> (i32, i32) {
        (self.y, self.x)
    }
}

impl From<(i32, i32)> for Position {
    fn from((y, x): (i32, i32)) -> Self {
        Self::new(y, x)
    }
}

impl Add for Position {
    type Output = Position;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.y + rhs.y, self.x + rhs.x)
    }
}

impl Sub for Position {
    type Output = Position;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.y - rhs.y, self.x - rhs.x)
    }
}

impl Neg for Position {
    type Output = Position;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.y, -self.x)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.y, self.x)
    }
}

// ========== Tests ==========
