//! Row-scan propagation.
//!
//! Rows are scanned outward from the origin row. Within a row a visible
//! cell that lets light through reveals its horizontal neighbour and the
//! two cells of the next row out that touch it: a left-to-right pass
//! followed by a right-to-left pass. The origin row is scanned in both
//! vertical directions.
//!
//! With the origin on the bottom row, which is where an observation window
//! puts it, this is exactly the classic scan used by grid-world
//! reinforcement learning environments.

use super::sweep::{check_origin, is_lit};
use super::VisibilityMask;
use crate::error::GridResult;
use crate::geometry::Position;
use crate::grid::Grid;

pub fn minigrid_visibility(grid: &Grid, origin: Position) -> GridResult<VisibilityMask> {
    check_origin(grid, origin)?;

    let mut mask = VisibilityMask::filled(grid.shape(), false);
    mask.set(origin, true);

    let height = grid.height() as i32;
    for y in (0..=origin.y).rev() {
        scan_row(grid, origin, &mut mask, y, -1);
    }
    for y in origin.y..height {
        scan_row(grid, origin, &mut mask, y, 1);
    }

    Ok(mask)
}

/// Spreads light along row `y` and into row `y + dy`.
fn scan_row(grid: &Grid, origin: Position, mask: &mut VisibilityMask, y: i32, dy: i32) {
    let width = grid.width() as i32;
    let spreads_out = grid.contains(Position::new(y + dy, 0));

    let reveal = |mask: &mut VisibilityMask, x: i32, dx: i32| {
        if !is_lit(grid, mask, origin, Position::new(y, x)) {
            return;
        }
        mask.set(Position::new(y, x + dx), true);
        if spreads_out {
            mask.set(Position::new(y + dy, x + dx), true);
            mask.set(Position::new(y + dy, x), true);
        }
    };

    for x in 0..width - 1 {
        reveal(mask, x, 1);
    }
    for x in (1..width).rev() {
        reveal(mask, x, -1);
    }
}
