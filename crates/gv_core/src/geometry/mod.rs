//! # Geometry Kernel
//!
//! Pure value types for addressing the grid and the rotation/translation
//! algebra over them.
//!
//! ## Conventions
//! - Matrix convention: `y` is the row (growing downwards), `x` the column.
//! - `Orientation::N` faces decreasing `y`; offsets relative to a pose use
//!   `(-1, 0)` for "straight ahead".
//! - Rotations are about the origin and only in quarter turns.

mod area;
mod orientation;
mod pose;
mod position;
mod traversal;

pub use area::{Area, AreaPositions, Shape};
pub use orientation::Orientation;
pub use pose::Pose;
pub use position::Position;
pub use traversal::{diagonal_strides, manhattan_boundary, DiagonalStrides, StrideDirection};
