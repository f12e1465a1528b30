//! Cell objects and the object type registry.

mod color;
mod grid_object;
mod registry;

pub use color::Color;
pub use grid_object::{DoorStatus, GridObject, ObjectKind, ObjectParams};
pub use registry::{CellEncoding, ObjectRegistry};
