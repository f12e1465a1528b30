//! # gv_core - Grid-World Geometry & Visibility Kernel
//!
//! The geometric core of a 2D grid world holding typed objects and one
//! oriented agent.
//!
//! ## Features
//! - Integer geometry: positions, orientations, areas, poses, traversal orders
//! - Dense grid container with sub-area extraction and egocentric rotation
//! - Closed set of cell objects and a type registry for compact encodings
//! - Five visibility algorithms behind one trait, plus seeded batch evaluation
//! - Egocentric observation pipeline
//!
//! ```rust
//! use gv_core::{make_visibility, Grid, GridObject, Position};
//!
//! let mut grid = Grid::new(3, 5).unwrap();
//! grid.set(Position::new(1, 2), GridObject::Wall).unwrap();
//!
//! let raytracing = gv_core::raytracing_visibility(&grid, Position::new(2, 2)).unwrap();
//! assert!(!raytracing.is_visible(Position::new(0, 2)));
//! assert!(make_visibility("partial_visibility").is_ok());
//! ```

pub mod agent;
pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod objects;
pub mod observation;
pub mod visibility;

pub use agent::Agent;
pub use config::KernelConfig;
pub use error::{GridError, GridResult};
pub use geometry::{
    diagonal_strides, manhattan_boundary, Area, Orientation, Pose, Position, Shape,
    StrideDirection,
};
pub use grid::Grid;
pub use objects::{CellEncoding, Color, DoorStatus, GridObject, ObjectKind, ObjectRegistry};
pub use observation::{observe, Observation, ObservationWindow};
pub use visibility::{
    compute_batch, full_visibility, make_visibility, minigrid_visibility, partial_visibility,
    raytracing_visibility, stochastic_raytracing_visibility, VisibilityFunction, VisibilityKind,
    VisibilityMask,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
