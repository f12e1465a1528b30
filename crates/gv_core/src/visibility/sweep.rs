//! Quadrant sweep shared by the diagonal-propagation algorithms.
//!
//! The grid is split into the four quadrants that meet at the origin (the
//! origin row and column belong to two or four of them). Each quadrant is
//! walked with [`diagonal_strides`] starting at the origin, so a cell is
//! always decided after every cell between it and the origin. Cells are
//! addressed by their quadrant offset `(a, b)`: `a` rows and `b` columns
//! away from the origin, both non-negative.
//!
//! Cells on the origin row or column only ever depend on cells of that same
//! row or column, so deciding them once per quadrant gives the same answer
//! every time and writing them into one shared mask is an OR-merge.

use super::VisibilityMask;
use crate::error::{GridError, GridResult};
use crate::geometry::{diagonal_strides, Area, Position, StrideDirection};
use crate::grid::Grid;

const QUADRANTS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Fails with `OutOfBounds` when `origin` is not a cell of `grid`.
pub(crate) fn check_origin(grid: &Grid, origin: Position) -> GridResult<()> {
    if grid.contains(origin) {
        Ok(())
    } else {
        Err(GridError::OutOfBounds { position: origin, area: grid.area() })
    }
}

/// Whether light passes through the cell at `position`.
///
/// The origin always does, whatever stands on it.
#[inline]
pub(crate) fn is_lit(
    grid: &Grid,
    mask: &VisibilityMask,
    origin: Position,
    position: Position,
) -> bool {
    if position == origin {
        return true;
    }
    mask.is_visible(position) && grid.get(position).map_or(false, |cell| cell.transparent())
}

/// Runs `decide(a, b, lit)` for every cell but the origin, in propagation
/// order, and records the answer. `lit(a, b)` reports whether the cell at
/// offset `(a, b)` of the current quadrant lets light through; offsets
/// outside the quadrant are never lit.
pub(crate) fn sweep_quadrants<F>(
    grid: &Grid,
    origin: Position,
    mut decide: F,
) -> GridResult<VisibilityMask>
where
    F: FnMut(i32, i32, &dyn Fn(i32, i32) -> bool) -> bool,
{
    check_origin(grid, origin)?;

    let mut mask = VisibilityMask::filled(grid.shape(), false);
    mask.set(origin, true);

    for (row_sign, col_sign) in QUADRANTS {
        let quadrant = quadrant_area(grid, origin, row_sign, col_sign);
        let direction = StrideDirection::away_from(row_sign, col_sign);

        // the first position of every sweep is the origin itself
        for position in diagonal_strides(quadrant, direction).skip(1) {
            let a = (position.y - origin.y).abs();
            let b = (position.x - origin.x).abs();

            let lit = |da: i32, db: i32| {
                da >= 0
                    && db >= 0
                    && is_lit(
                        grid,
                        &mask,
                        origin,
                        Position::new(origin.y + row_sign * da, origin.x + col_sign * db),
                    )
            };
            let visible = decide(a, b, &lit);
            mask.set(position, visible);
        }
    }

    Ok(mask)
}

fn quadrant_area(grid: &Grid, origin: Position, row_sign: i32, col_sign: i32) -> Area {
    let bounds = grid.area();
    let (ymin, ymax) =
        if row_sign < 0 { (bounds.ymin(), origin.y) } else { (origin.y, bounds.ymax()) };
    let (xmin, xmax) =
        if col_sign < 0 { (bounds.xmin(), origin.x) } else { (origin.x, bounds.xmax()) };
    Area::from_bounds(ymin, ymax, xmin, xmax)
}
