//! Observation Pipeline
//!
//! Builds what an agent perceives: the window in front of it, turned so the
//! agent faces up, with every cell it cannot see replaced by `Hidden`.
//!
//! ## Steps
//! 1. Window area relative to the agent, mapped to absolute coordinates.
//! 2. Sub-grid extraction (cells beyond the world are `Hidden`).
//! 3. Rotation by the agent's orientation.
//! 4. Visibility from the agent's cell in the window.
//! 5. Masking.

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::agent::Agent;
use crate::error::{GridError, GridResult};
use crate::geometry::{Area, Orientation, Position};
use crate::grid::Grid;
use crate::objects::{CellEncoding, GridObject, ObjectRegistry};
use crate::visibility::{VisibilityFunction, VisibilityMask};

// =============================================================================
// ObservationWindow
// =============================================================================

/// Size of the egocentric view. The agent sits on the bottom row, in the
/// middle column, so `width` must be odd.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWindow")]
pub struct ObservationWindow {
    pub(crate) height: usize,
    pub(crate) width: usize,
}

#[derive(Deserialize)]
struct RawWindow {
    height: usize,
    width: usize,
}

impl TryFrom<RawWindow> for ObservationWindow {
    type Error = GridError;

    fn try_from(raw: RawWindow) -> Result<Self, Self::Error> {
        ObservationWindow::new(raw.height, raw.width)
    }
}

impl Default for ObservationWindow {
    fn default() -> Self {
        Self { height: 7, width: 7 }
    }
}

impl ObservationWindow {
    pub fn new(height: usize, width: usize) -> GridResult<Self> {
        let window = Self { height, width };
        window.validate()?;
        Ok(window)
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn validate(&self) -> GridResult<()> {
        if self.height == 0 || self.width == 0 {
            return Err(GridError::InvalidArgument(format!(
                "observation window must be positive, got {}x{}",
                self.height, self.width
            )));
        }
        if self.width % 2 == 0 {
            return Err(GridError::InvalidArgument(format!(
                "observation window width must be odd, got {}",
                self.width
            )));
        }
        Ok(())
    }

    #[inline]
    fn half_width(&self) -> i32 {
        (self.width / 2) as i32
    }

    /// `((-(height - 1), 0), (-(width / 2), width / 2))`, in the agent's frame.
    pub fn relative_area(&self) -> Area {
        let half = self.half_width();
        Area::from_bounds(-(self.height as i32 - 1), 0, -half, half)
    }

    /// The agent's cell inside the observed grid.
    pub fn agent_position(&self) -> Position {
        Position::new(self.height as i32 - 1, self.half_width())
    }
}

// =============================================================================
// Observation
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// The window, agent facing up, unseen cells `Hidden`.
    pub grid: Grid,
    /// The agent in window coordinates, always facing `N`.
    pub agent: Agent,
    /// Which window cells were visible.
    pub mask: VisibilityMask,
}

impl Observation {
    /// Row-major `(type, state, color)` triples of the observed grid.
    pub fn encode(&self, registry: &ObjectRegistry) -> GridResult<Vec<CellEncoding>> {
        self.grid.encode(registry)
    }
}

/// Observation of `grid` by `agent` through `window`.
///
/// # Errors
/// - `InvalidArgument` for a malformed window.
/// - Whatever `visibility` reports.
pub fn observe(
    grid: &Grid,
    agent: &Agent,
    window: ObservationWindow,
    visibility: &dyn VisibilityFunction,
    rng: &mut dyn RngCore,
) -> GridResult<Observation> {
    window.validate()?;

    let area = agent.pov_area(window.relative_area());
    let mut view = grid.subgrid(area).change_orientation(agent.orientation);
    let position = window.agent_position();

    let mask = visibility.compute(&view, position, rng)?;
    for cell in view.positions() {
        if !mask.is_visible(cell) {
            view.set(cell, GridObject::Hidden)?;
        }
    }

    log::trace!(
        "observed {} from {} facing {}: {} of {} cells visible",
        area,
        agent.position,
        agent.orientation,
        mask.count_visible(),
        view.shape().len()
    );

    let agent = Agent::new(position, Orientation::N).with_held(agent.held.clone());
    Ok(Observation { grid: view, agent, mask })
}

// ========== Tests ==========
