//! Conservative diagonal propagation.
//!
//! A cell is visible when any of its (up to three) neighbours one step
//! closer to the origin lets light through. Light therefore leaks around
//! single-cell gaps and corners, which makes this the most permissive of
//! the occluding algorithms.

use super::sweep::sweep_quadrants;
use super::VisibilityMask;
use crate::error::GridResult;
use crate::geometry::Position;
use crate::grid::Grid;

pub fn partial_visibility(grid: &Grid, origin: Position) -> GridResult<VisibilityMask> {
    sweep_quadrants(grid, origin, |a, b, lit| lit(a - 1, b) || lit(a, b - 1) || lit(a - 1, b - 1))
}
