//! Rectangular shapes and areas, and the lazy position sequences over them.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Orientation, Position};
use crate::error::{GridError, GridResult};

// =============================================================================
// Shape
// =============================================================================

/// Dimensions of a rectangular region, in matrix order (rows, columns).
/// Both are positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawShape")]
pub struct Shape {
    height: usize,
    width: usize,
}

#[derive(Deserialize)]
struct RawShape {
    height: usize,
    width: usize,
}

impl TryFrom<RawShape> for Shape {
    type Error = GridError;

    fn try_from(raw: RawShape) -> Result<Self, Self::Error> {
        Shape::new(raw.height, raw.width)
    }
}

impl Shape {
    pub fn new(height: usize, width: usize) -> GridResult<Self> {
        if height == 0 || width == 0 {
            return Err(GridError::InvalidArgument(format!(
                "shape must be positive, got {}x{}",
                height, width
            )));
        }
        Ok(Self { height, width })
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.height * self.width
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Area covering `(0, 0)..=(height - 1, width - 1)`.
    pub fn area(&self) -> Area {
        Area::from_bounds(0, self.height as i32 - 1, 0, self.width as i32 - 1)
    }

    /// Row-major offset of `pos`, or `None` when outside.
    #[inline]
    pub(crate) fn index_of(&self, pos: Position) -> Option<usize> {
        if pos.y < 0 || pos.x < 0 {
            return None;
        }
        let (y, x) = (pos.y as usize, pos.x as usize);
        (y < self.height && x < self.width).then_some(y * self.width + x)
    }

    /// Shape of an array after rotating it to face `orientation`.
    pub fn rotated(&self, orientation: Orientation) -> Shape {
        match orientation {
            Orientation::N | Orientation::S => *self,
            Orientation::E | Orientation::W => Shape { height: self.width, width: self.height },
        }
    }

    /// Where the cell at `pos` of an array of this shape lands once the
    /// array is rotated to face `orientation`.
    ///
    /// `E` is one counter-clockwise quarter turn, `S` a half turn and `W`
    /// three quarter turns, so the viewer's forward direction ends up on top.
    pub fn rotate_position(&self, pos: Position, orientation: Orientation) -> Position {
        let h = self.height as i32;
        let w = self.width as i32;
        match orientation {
            Orientation::N => pos,
            Orientation::E => Position::new(w - 1 - pos.x, pos.y),
            Orientation::S => Position::new(h - 1 - pos.y, w - 1 - pos.x),
            Orientation::W => Position::new(pos.x, h - 1 - pos.y),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

// =============================================================================
// Area
// =============================================================================

/// Inclusive vertical and horizontal ranges.
///
/// Both ranges are non-decreasing; `Area::new` enforces it and every
/// transformation preserves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawArea", into = "RawArea")]
pub struct Area {
    ymin: i32,
    ymax: i32,
    xmin: i32,
    xmax: i32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawArea {
    ys: (i32, i32),
    xs: (i32, i32),
}

impl TryFrom<RawArea> for Area {
    type Error = GridError;

    fn try_from(raw: RawArea) -> Result<Self, Self::Error> {
        Area::new(raw.ys, raw.xs)
    }
}

impl From<Area> for RawArea {
    fn from(area: Area) -> Self {
        RawArea { ys: area.y_range(), xs: area.x_range() }
    }
}

impl Area {
    pub fn new(ys: (i32, i32), xs: (i32, i32)) -> GridResult<Self> {
        if ys.0 > ys.1 {
            return Err(GridError::InvalidRange { axis: "ys", min: ys.0, max: ys.1 });
        }
        if xs.0 > xs.1 {
            return Err(GridError::InvalidRange { axis: "xs", min: xs.0, max: xs.1 });
        }
        Ok(Self::from_bounds(ys.0, ys.1, xs.0, xs.1))
    }

    #[inline]
    pub(crate) fn from_bounds(ymin: i32, ymax: i32, xmin: i32, xmax: i32) -> Self {
        debug_assert!(ymin <= ymax && xmin <= xmax);
        Self { ymin, ymax, xmin, xmax }
    }

    #[inline]
    pub fn ymin(&self) -> i32 {
        self.ymin
    }
    #[inline]
    pub fn ymax(&self) -> i32 {
        self.ymax
    }
    #[inline]
    pub fn xmin(&self) -> i32 {
        self.xmin
    }
    #[inline]
    pub fn xmax(&self) -> i32 {
        self.xmax
    }

    pub fn y_range(&self) -> (i32, i32) {
        (self.ymin, self.ymax)
    }

    pub fn x_range(&self) -> (i32, i32) {
        (self.xmin, self.xmax)
    }

    #[inline]
    pub fn height(&self) -> usize {
        (self.ymax - self.ymin + 1) as usize
    }

    #[inline]
    pub fn width(&self) -> usize {
        (self.xmax - self.xmin + 1) as usize
    }

    pub fn shape(&self) -> Shape {
        Shape { height: self.height(), width: self.width() }
    }

    pub fn top_left(&self) -> Position {
        Position::new(self.ymin, self.xmin)
    }

    pub fn top_right(&self) -> Position {
        Position::new(self.ymin, self.xmax)
    }

    pub fn bottom_left(&self) -> Position {
        Position::new(self.ymax, self.xmin)
    }

    pub fn bottom_right(&self) -> Position {
        Position::new(self.ymax, self.xmax)
    }

    /// All positions, row by row.
    pub fn positions(&self) -> AreaPositions {
        AreaPositions::new((self.ymin, self.ymax), (self.xmin, self.xmax))
    }

    /// Positions on the outer ring: top row, bottom row, then the left and
    /// right cells of every row in between. Each position appears once.
    pub fn positions_border(&self) -> impl Iterator<Item = Position> + Clone {
        let Area { ymin, ymax, xmin, xmax } = *self;

        let top = AreaPositions::new((ymin, ymin), (xmin, xmax));
        let bottom = if ymax > ymin {
            AreaPositions::new((ymax, ymax), (xmin, xmax))
        } else {
            AreaPositions::empty()
        };
        let sides = ((ymin + 1)..ymax).flat_map(move |y| {
            let right = (xmax > xmin).then_some(Position::new(y, xmax));
            std::iter::once(Position::new(y, xmin)).chain(right)
        });

        top.chain(bottom).chain(sides)
    }

    /// Positions not on the border.
    pub fn positions_inside(&self) -> AreaPositions {
        AreaPositions::new((self.ymin + 1, self.ymax - 1), (self.xmin + 1, self.xmax - 1))
    }

    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        self.ymin <= position.y
            && position.y <= self.ymax
            && self.xmin <= position.x
            && position.x <= self.xmax
    }

    pub fn translate(&self, offset: Position) -> Area {
        Area::from_bounds(
            self.ymin + offset.y,
            self.ymax + offset.y,
            self.xmin + offset.x,
            self.xmax + offset.x,
        )
    }

    /// Rotates the area about the origin, consistently with
    /// `Position::rotate`.
    pub fn rotate(&self, orientation: Orientation) -> Area {
        let Area { ymin, ymax, xmin, xmax } = *self;
        match orientation {
            Orientation::N => *self,
            Orientation::S => Area::from_bounds(-ymax, -ymin, -xmax, -xmin),
            Orientation::E => Area::from_bounds(xmin, xmax, -ymax, -ymin),
            Orientation::W => Area::from_bounds(-xmax, -xmin, ymin, ymax),
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Area(ys=({}, {}), xs=({}, {}))", self.ymin, self.ymax, self.xmin, self.xmax)
    }
}

// =============================================================================
// AreaPositions
// =============================================================================

/// Row-major iterator over an inclusive rectangle; empty when either range
/// is decreasing. Cloning restarts from the clone's current point.
#[derive(Debug, Clone)]
pub struct AreaPositions {
    ymax: i32,
    xmin: i32,
    xmax: i32,
    next: Option<Position>,
}

impl AreaPositions {
    fn new(ys: (i32, i32), xs: (i32, i32)) -> Self {
        let next = (ys.0 <= ys.1 && xs.0 <= xs.1).then_some(Position::new(ys.0, xs.0));
        Self { ymax: ys.1, xmin: xs.0, xmax: xs.1, next }
    }

    fn empty() -> Self {
        Self { ymax: 0, xmin: 0, xmax: 0, next: None }
    }

    fn remaining(&self) -> usize {
        match self.next {
            Some(p) => {
                let width = (self.xmax - self.xmin + 1) as usize;
                (self.ymax - p.y) as usize * width + (self.xmax - p.x) as usize + 1
            }
            None => 0,
        }
    }
}

impl Iterator for AreaPositions {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current.x < self.xmax {
            Some(Position::new(current.y, current.x + 1))
        } else if current.y < self.ymax {
            Some(Position::new(current.y + 1, self.xmin))
        } else {
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for AreaPositions {}

// ========== Tests ==========
