//! Visibility Engine
//!
//! Computes which cells of a grid can be seen from an origin cell.
//!
//! ## Contract
//! - The mask has the grid's shape and the origin is always visible.
//! - The grid is never modified.
//! - An origin outside the grid fails with `OutOfBounds`.
//! - A cell is *lit*, i.e. lets light through to cells further out, when
//!   it is the origin or when it is visible and transparent. Opaque cells
//!   can be visible; they only hide what lies behind them.
//!
//! ## Algorithms
//! - `full`: everything is visible.
//! - `partial`: diagonal propagation from any of three nearer neighbours.
//! - `minigrid`: row scans outward from the origin row.
//! - `raytracing`: diagonal propagation along weighted ray parents.
//! - `stochastic_raytracing`: the same, with split rays decided by a coin
//!   weighted by the lit share of the ray.

mod full;
mod mask;
mod minigrid;
mod partial;
mod raytracing;
mod sweep;

use std::fmt;
use std::str::FromStr;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};
use crate::geometry::Position;
use crate::grid::Grid;

pub use full::full_visibility;
pub use mask::VisibilityMask;
pub use minigrid::minigrid_visibility;
pub use partial::partial_visibility;
pub use raytracing::{raytracing_visibility, stochastic_raytracing_visibility};

/// Batches at least this large are evaluated on the rayon pool.
pub const PARALLEL_BATCH_THRESHOLD: usize = 32;

// =============================================================================
// VisibilityKind
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityKind {
    Full,
    Partial,
    #[default]
    Minigrid,
    Raytracing,
    StochasticRaytracing,
}

impl VisibilityKind {
    pub const ALL: [VisibilityKind; 5] = [
        VisibilityKind::Full,
        VisibilityKind::Partial,
        VisibilityKind::Minigrid,
        VisibilityKind::Raytracing,
        VisibilityKind::StochasticRaytracing,
    ];

    pub fn name(self) -> &'static str {
        match self {
            VisibilityKind::Full => "full",
            VisibilityKind::Partial => "partial",
            VisibilityKind::Minigrid => "minigrid",
            VisibilityKind::Raytracing => "raytracing",
            VisibilityKind::StochasticRaytracing => "stochastic_raytracing",
        }
    }

    /// Whether results depend on the random source.
    pub fn is_stochastic(self) -> bool {
        matches!(self, VisibilityKind::StochasticRaytracing)
    }

    pub fn build(self) -> Box<dyn VisibilityFunction> {
        match self {
            VisibilityKind::Full => Box::new(FullVisibility),
            VisibilityKind::Partial => Box::new(PartialVisibility),
            VisibilityKind::Minigrid => Box::new(MinigridVisibility),
            VisibilityKind::Raytracing => Box::new(RaytracingVisibility),
            VisibilityKind::StochasticRaytracing => Box::new(StochasticRaytracingVisibility),
        }
    }
}

impl fmt::Display for VisibilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the short names (`"raytracing"`) and the long ones
/// (`"raytracing_visibility"`).
impl FromStr for VisibilityKind {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let short = s.strip_suffix("_visibility").unwrap_or(s);
        VisibilityKind::ALL
            .into_iter()
            .find(|kind| kind.name() == short)
            .ok_or_else(|| GridError::UnknownVisibility(s.to_string()))
    }
}

// =============================================================================
// VisibilityFunction
// =============================================================================

/// A visibility algorithm.
///
/// Deterministic implementations ignore `rng`.
pub trait VisibilityFunction: Send + Sync + fmt::Debug {
    fn kind(&self) -> VisibilityKind;

    fn compute(
        &self,
        grid: &Grid,
        origin: Position,
        rng: &mut dyn RngCore,
    ) -> GridResult<VisibilityMask>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FullVisibility;

#[derive(Debug, Clone, Copy, Default)]
pub struct PartialVisibility;

#[derive(Debug, Clone, Copy, Default)]
pub struct MinigridVisibility;

#[derive(Debug, Clone, Copy, Default)]
pub struct RaytracingVisibility;

#[derive(Debug, Clone, Copy, Default)]
pub struct StochasticRaytracingVisibility;

impl VisibilityFunction for FullVisibility {
    fn kind(&self) -> VisibilityKind {
        VisibilityKind::Full
    }

    fn compute(
        &self,
        grid: &Grid,
        origin: Position,
        _rng: &mut dyn RngCore,
    ) -> GridResult<VisibilityMask> {
        full_visibility(grid, origin)
    }
}

impl VisibilityFunction for PartialVisibility {
    fn kind(&self) -> VisibilityKind {
        VisibilityKind::Partial
    }

    fn compute(
        &self,
        grid: &Grid,
        origin: Position,
        _rng: &mut dyn RngCore,
    ) -> GridResult<VisibilityMask> {
        partial_visibility(grid, origin)
    }
}

impl VisibilityFunction for MinigridVisibility {
    fn kind(&self) -> VisibilityKind {
        VisibilityKind::Minigrid
    }

    fn compute(
        &self,
        grid: &Grid,
        origin: Position,
        _rng: &mut dyn RngCore,
    ) -> GridResult<VisibilityMask> {
        minigrid_visibility(grid, origin)
    }
}

impl VisibilityFunction for RaytracingVisibility {
    fn kind(&self) -> VisibilityKind {
        VisibilityKind::Raytracing
    }

    fn compute(
        &self,
        grid: &Grid,
        origin: Position,
        _rng: &mut dyn RngCore,
    ) -> GridResult<VisibilityMask> {
        raytracing_visibility(grid, origin)
    }
}

impl VisibilityFunction for StochasticRaytracingVisibility {
    fn kind(&self) -> VisibilityKind {
        VisibilityKind::StochasticRaytracing
    }

    fn compute(
        &self,
        grid: &Grid,
        origin: Position,
        rng: &mut dyn RngCore,
    ) -> GridResult<VisibilityMask> {
        stochastic_raytracing_visibility(grid, origin, rng)
    }
}

/// Resolves a visibility function by name.
///
/// # Errors
/// `UnknownVisibility` when `name` is not one of `full`, `partial`,
/// `minigrid`, `raytracing`, `stochastic_raytracing` (optionally suffixed
/// with `_visibility`).
pub fn make_visibility(name: &str) -> GridResult<Box<dyn VisibilityFunction>> {
    let kind: VisibilityKind = name.parse()?;
    log::trace!("resolved visibility '{}' to {}", name, kind);
    Ok(kind.build())
}

// =============================================================================
// Batch evaluation
// =============================================================================

/// Evaluates `function` on every `(grid, origin)` job.
///
/// Job `i` draws from its own `ChaCha8Rng` seeded with `seed + i`, so the
/// results do not depend on whether the batch ran in parallel.
pub fn compute_batch(
    function: &dyn VisibilityFunction,
    jobs: &[(Grid, Position)],
    seed: u64,
) -> Vec<GridResult<VisibilityMask>> {
    let run = |(index, (grid, origin)): (usize, &(Grid, Position))| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(index as u64));
        function.compute(grid, *origin, &mut rng)
    };

    if jobs.len() >= PARALLEL_BATCH_THRESHOLD {
        log::debug!("computing {} {} masks in parallel", jobs.len(), function.kind());
        jobs.par_iter().enumerate().map(run).collect()
    } else {
        jobs.iter().enumerate().map(run).collect()
    }
}

// ========== Tests ==========
