use super::sweep::check_origin;
use super::VisibilityMask;
use crate::error::GridResult;
use crate::geometry::Position;
use crate::grid::Grid;

/// Everything is visible.
pub fn full_visibility(grid: &Grid, origin: Position) -> GridResult<VisibilityMask> {
    check_origin(grid, origin)?;
    Ok(VisibilityMask::filled(grid.shape(), true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::GridObject;

    #[test]
    fn test_full_visibility_ignores_walls() {
        let mut grid = Grid::new(3, 5).unwrap();
        for x in 0..5 {
            grid.set(Position::new(1, x), GridObject::Wall).unwrap();
        }
        let mask = full_visibility(&grid, Position::new(2, 2)).unwrap();
        assert!(mask.all_visible());
        assert_eq!(mask.shape(), grid.shape());
    }

    #[test]
    fn test_full_visibility_checks_origin() {
        let grid = Grid::new(3, 5).unwrap();
        assert!(full_visibility(&grid, Position::new(3, 0)).is_err());
    }
}
