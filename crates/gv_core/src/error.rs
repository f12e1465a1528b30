use thiserror::Error;

use crate::geometry::{Area, Position};
use crate::objects::ObjectKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid range: {axis} ({min}, {max}) should be non-decreasing")]
    InvalidRange { axis: &'static str, min: i32, max: i32 },

    #[error("Position {position} is out of bounds of {area}")]
    OutOfBounds { position: Position, area: Area },

    #[error("Shape mismatch: row {row} has {found} cells, expected {expected}")]
    ShapeMismatch { row: usize, expected: usize, found: usize },

    #[error("Unknown visibility function: {0}")]
    UnknownVisibility(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown grid object: {0}")]
    UnknownObject(String),

    #[error("Grid object {object} requires parameter '{parameter}'")]
    MissingParameter { object: ObjectKind, parameter: &'static str },

    #[error("Object kind {0} is not registered")]
    Unregistered(ObjectKind),
}

impl GridError {
    /// Errors caused by addressing rather than by malformed input.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, GridError::OutOfBounds { .. })
    }
}

pub type GridResult<T> = std::result::Result<T, GridError>;
