//! Traversal orders over areas: Manhattan rings and diagonal strides.

use serde::{Deserialize, Serialize};

use super::{Area, Position};
use crate::error::{GridError, GridResult};

/// Positions at exactly Manhattan distance `distance` from `center`.
///
/// Returns `4 * distance` positions, clockwise from the top vertex:
///
/// ```text
///       0
///     7   1
///   6   c   2
///     5   3
///       4
/// ```
pub fn manhattan_boundary(center: Position, distance: i32) -> GridResult<Vec<Position>> {
    if distance <= 0 {
        return Err(GridError::InvalidArgument(format!(
            "boundary distance must be positive, got {}",
            distance
        )));
    }

    let Position { y, x } = center;
    let d = distance;
    let mut boundary = Vec::with_capacity(4 * d as usize);
    boundary.extend((0..d).map(|i| Position::new(y - d + i, x + i)));
    boundary.extend((0..d).map(|i| Position::new(y + i, x + d - i)));
    boundary.extend((0..d).map(|i| Position::new(y + d - i, x - i)));
    boundary.extend((0..d).map(|i| Position::new(y - i, x - d + i)));
    Ok(boundary)
}

/// Corner a diagonal sweep expands toward.
///
/// A `NW` sweep starts at the bottom-right corner of the area, `NE` at the
/// bottom-left, `SW` at the top-right and `SE` at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrideDirection {
    NW,
    NE,
    SW,
    SE,
}

impl StrideDirection {
    /// (start corner, row step, column step)
    fn frame(self, area: &Area) -> (Position, i32, i32) {
        match self {
            StrideDirection::NW => (area.bottom_right(), -1, -1),
            StrideDirection::NE => (area.bottom_left(), -1, 1),
            StrideDirection::SW => (area.top_right(), 1, -1),
            StrideDirection::SE => (area.top_left(), 1, 1),
        }
    }

    /// Sweep whose start corner is the corner of a quadrant touching the
    /// quadrant's origin, given the quadrant's row and column signs.
    pub(crate) fn away_from(row_sign: i32, col_sign: i32) -> Self {
        match (row_sign < 0, col_sign < 0) {
            (true, true) => StrideDirection::NW,
            (true, false) => StrideDirection::NE,
            (false, true) => StrideDirection::SW,
            (false, false) => StrideDirection::SE,
        }
    }
}

/// Positions of `area` ordered by stride index, i.e. by Manhattan distance
/// from the sweep's start corner.
///
/// Within stride `s` the position `k` steps along the column axis comes
/// `k`-th. Every position of the area is produced exactly once, and always
/// after both of its neighbours that are one step closer to the start
/// corner.
pub fn diagonal_strides(area: Area, direction: StrideDirection) -> DiagonalStrides {
    DiagonalStrides::new(area, direction)
}

/// Lazy iterator behind [`diagonal_strides`].
#[derive(Debug, Clone)]
pub struct DiagonalStrides {
    corner: Position,
    row_step: i32,
    col_step: i32,
    max_row: i32,
    max_col: i32,
    stride: i32,
    k: i32,
}

impl DiagonalStrides {
    fn new(area: Area, direction: StrideDirection) -> Self {
        let (corner, row_step, col_step) = direction.frame(&area);
        let max_row = area.height() as i32 - 1;
        let max_col = area.width() as i32 - 1;
        Self { corner, row_step, col_step, max_row, max_col, stride: 0, k: 0 }
    }

    #[inline]
    fn last_stride(&self) -> i32 {
        self.max_row + self.max_col
    }

    /// First admissible `k` of a stride (row offset `stride - k` must not
    /// exceed `max_row`).
    #[inline]
    fn first_k(&self, stride: i32) -> i32 {
        (stride - self.max_row).max(0)
    }
}

impl Iterator for DiagonalStrides {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stride > self.last_stride() {
            return None;
        }

        let rows = self.stride - self.k;
        let position = Position::new(
            self.corner.y + self.row_step * rows,
            self.corner.x + self.col_step * self.k,
        );

        if self.k < self.stride.min(self.max_col) {
            self.k += 1;
        } else {
            self.stride += 1;
            self.k = self.first_k(self.stride);
        }

        Some(position)
    }
}

// ========== Tests ==========

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn area(ys: (i32, i32), xs: (i32, i32)) -> Area {
        Area::new(ys, xs).unwrap()
    }

    #[test]
    fn test_manhattan_boundary_distance_one() {
        let boundary = manhattan_boundary(Position::new(5, 5), 1).unwrap();
        assert_eq!(
            boundary,
            vec![
                Position::new(4, 5),
                Position::new(5, 6),
                Position::new(6, 5),
                Position::new(5, 4),
            ]
        );
    }

    #[test]
    fn test_manhattan_boundary_distance_two() {
        let center = Position::new(0, 0);
        let boundary = manhattan_boundary(center, 2).unwrap();
        assert_eq!(boundary.len(), 8);
        assert_eq!(boundary[0], Position::new(-2, 0));
        assert_eq!(boundary[2], Position::new(0, 2));
        assert_eq!(boundary[4], Position::new(2, 0));
        assert_eq!(boundary[6], Position::new(0, -2));

        let unique: HashSet<_> = boundary.iter().copied().collect();
        assert_eq!(unique.len(), 8);
        for p in boundary {
            assert_eq!(p.manhattan_distance(center), 2);
        }
    }

    #[test]
    fn test_manhattan_boundary_rejects_non_positive() {
        assert!(matches!(
            manhattan_boundary(Position::ORIGIN, 0),
            Err(GridError::InvalidArgument(_))
        ));
        assert!(manhattan_boundary(Position::ORIGIN, -3).is_err());
    }

    #[test]
    fn test_diagonal_strides_nw_order() {
        let a = area((0, 1), (0, 2));
        let order: Vec<_> = diagonal_strides(a, StrideDirection::NW).collect();
        assert_eq!(
            order,
            vec![
                Position::new(1, 2),
                Position::new(0, 2),
                Position::new(1, 1),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(0, 0),
            ]
        );
    }

    #[test]
    fn test_diagonal_strides_ne_order() {
        let a = area((0, 1), (0, 1));
        let order: Vec<_> = diagonal_strides(a, StrideDirection::NE).collect();
        assert_eq!(
            order,
            vec![Position::new(1, 0), Position::new(0, 0), Position::new(1, 1), Position::new(0, 1)]
        );
    }

    #[test]
    fn test_diagonal_strides_cover_area_once() {
        let a = area((-2, 3), (4, 6));
        for direction in
            [StrideDirection::NW, StrideDirection::NE, StrideDirection::SW, StrideDirection::SE]
        {
            let order: Vec<_> = diagonal_strides(a, direction).collect();
            let unique: HashSet<_> = order.iter().copied().collect();
            assert_eq!(order.len(), a.positions().count());
            assert_eq!(unique.len(), order.len());
            assert!(order.iter().all(|p| a.contains(*p)));
        }
    }

    #[test]
    fn test_diagonal_strides_parents_come_first() {
        let a = area((0, 4), (0, 3));
        for direction in
            [StrideDirection::NW, StrideDirection::NE, StrideDirection::SW, StrideDirection::SE]
        {
            let (corner, row_step, col_step) = direction.frame(&a);
            let order: Vec<_> = diagonal_strides(a, direction).collect();
            assert_eq!(order[0], corner);

            let rank = |p: Position| order.iter().position(|q| *q == p).unwrap();
            for p in a.positions() {
                let toward_rows = Position::new(p.y - row_step, p.x);
                let toward_cols = Position::new(p.y, p.x - col_step);
                for parent in [toward_rows, toward_cols] {
                    if a.contains(parent) {
                        assert!(rank(parent) < rank(p));
                    }
                }
            }
        }
    }

    #[test]
    fn test_diagonal_strides_restartable() {
        let strides = diagonal_strides(area((0, 2), (0, 2)), StrideDirection::SE);
        let first: Vec<_> = strides.clone().collect();
        let second: Vec<_> = strides.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_diagonal_strides_single_cell() {
        let order: Vec<_> =
            diagonal_strides(area((3, 3), (7, 7)), StrideDirection::SW).collect();
        assert_eq!(order, vec![Position::new(3, 7)]);
    }
}
