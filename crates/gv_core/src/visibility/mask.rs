//! Boolean observability mask, shaped like the grid it was computed on.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};
use crate::geometry::{Orientation, Position, Shape};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMask")]
pub struct VisibilityMask {
    shape: Shape,
    cells: Vec<bool>,
}

#[derive(Deserialize)]
struct RawMask {
    shape: Shape,
    cells: Vec<bool>,
}

impl TryFrom<RawMask> for VisibilityMask {
    type Error = GridError;

    fn try_from(raw: RawMask) -> Result<Self, Self::Error> {
        if raw.cells.len() != raw.shape.len() {
            return Err(GridError::InvalidArgument(format!(
                "mask of shape {} needs {} flags, got {}",
                raw.shape,
                raw.shape.len(),
                raw.cells.len()
            )));
        }
        Ok(Self { shape: raw.shape, cells: raw.cells })
    }
}

impl VisibilityMask {
    pub fn filled(shape: Shape, visible: bool) -> Self {
        Self { shape, cells: vec![visible; shape.len()] }
    }

    /// Builds a mask from rows of flags, top to bottom.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> GridResult<Self> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        for (row, flags) in rows.iter().enumerate() {
            if flags.len() != width {
                return Err(GridError::ShapeMismatch { row, expected: width, found: flags.len() });
            }
        }
        let shape = Shape::new(rows.len(), width)?;
        Ok(Self { shape, cells: rows.into_iter().flatten().collect() })
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// `false` outside the mask.
    #[inline]
    pub fn is_visible(&self, position: Position) -> bool {
        self.shape.index_of(position).map_or(false, |i| self.cells[i])
    }

    pub fn get(&self, position: Position) -> GridResult<bool> {
        self.shape
            .index_of(position)
            .map(|i| self.cells[i])
            .ok_or_else(|| GridError::OutOfBounds { position, area: self.shape.area() })
    }

    #[inline]
    pub(crate) fn set(&mut self, position: Position, visible: bool) {
        if let Some(i) = self.shape.index_of(position) {
            self.cells[i] = visible;
        }
    }

    pub fn count_visible(&self) -> usize {
        self.cells.iter().filter(|v| **v).count()
    }

    pub fn all_visible(&self) -> bool {
        self.cells.iter().all(|v| *v)
    }

    /// Visible positions in row-major order.
    pub fn visible_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.shape.area().positions().zip(&self.cells).filter(|(_, v)| **v).map(|(p, _)| p)
    }

    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.cells.chunks(self.shape.width()).map(<[bool]>::to_vec).collect()
    }

    /// Same rotation as [`crate::grid::Grid::change_orientation`].
    pub fn change_orientation(&self, orientation: Orientation) -> Self {
        let shape = self.shape.rotated(orientation);
        let mut cells = vec![false; shape.len()];
        for (position, visible) in self.shape.area().positions().zip(&self.cells) {
            if let Some(i) = shape.index_of(self.shape.rotate_position(position, orientation)) {
                cells[i] = *visible;
            }
        }
        Self { shape, cells }
    }
}

impl fmt::Display for VisibilityMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.shape.width()).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for visible in row {
                write!(f, "{}", if *visible { '1' } else { '0' })?;
            }
        }
        Ok(())
    }
}

// ========== Tests ==========
