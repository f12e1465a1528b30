//! Ray-traced propagation, deterministic and stochastic.
//!
//! A ray from the origin to the cell at quadrant offset `(a, b)` crosses
//! the previous row (or column, whichever axis is longer) between two
//! cells. Those two cells are the parents, weighted by how much of the ray
//! passes through each. On a diagonal there is a single parent.

use rand::{Rng, RngCore};

use super::sweep::sweep_quadrants;
use super::VisibilityMask;
use crate::error::GridResult;
use crate::geometry::Position;
use crate::grid::Grid;

/// Parent offsets of `(a, b)` with their weights; the weights sum to one.
fn parents(a: i32, b: i32) -> [((i32, i32), f64); 2] {
    if a == b {
        [((a - 1, b - 1), 1.0), ((a - 1, b - 1), 0.0)]
    } else if a > b {
        let w = f64::from(b) / f64::from(a);
        [((a - 1, b), 1.0 - w), ((a - 1, b - 1), w)]
    } else {
        let w = f64::from(a) / f64::from(b);
        [((a, b - 1), 1.0 - w), ((a - 1, b - 1), w)]
    }
}

/// Visible iff some parent on the ray lets light through.
pub fn raytracing_visibility(grid: &Grid, origin: Position) -> GridResult<VisibilityMask> {
    sweep_quadrants(grid, origin, |a, b, lit| {
        parents(a, b).iter().any(|&((pa, pb), weight)| weight > 0.0 && lit(pa, pb))
    })
}

/// Like [`raytracing_visibility`], except that a cell whose parents
/// disagree is visible with probability equal to the weight of its lit
/// parents. Agrees with the deterministic version wherever the parents
/// agree, and never sees a cell the deterministic version hides.
pub fn stochastic_raytracing_visibility<R>(
    grid: &Grid,
    origin: Position,
    rng: &mut R,
) -> GridResult<VisibilityMask>
where
    R: RngCore + ?Sized,
{
    sweep_quadrants(grid, origin, |a, b, lit| {
        let mut lit_weight = 0.0;
        let mut shadowed = false;
        for ((pa, pb), weight) in parents(a, b) {
            if weight <= 0.0 {
                continue;
            }
            if lit(pa, pb) {
                lit_weight += weight;
            } else {
                shadowed = true;
            }
        }

        match (lit_weight > 0.0, shadowed) {
            (false, _) => false,
            (true, false) => true,
            (true, true) => rng.gen_bool(lit_weight.min(1.0)),
        }
    })
}

// ========== Tests ==========
