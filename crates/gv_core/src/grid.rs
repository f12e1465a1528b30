//! Grid Container
//!
//! A dense, row-major board of [`GridObject`]s addressed by [`Position`].
//!
//! ## Contract
//! - Every access is bounds-checked; failures return `OutOfBounds` and
//!   leave the grid untouched.
//! - `subgrid` and `change_orientation` return new, independently owned
//!   grids and never mutate the receiver.
//! - Cells of a sub-area lying outside the grid become `Hidden`, which is
//!   opaque, so they act as walls for visibility without being walls.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GridError, GridResult};
use crate::geometry::{Area, AreaPositions, Orientation, Position, Shape};
use crate::objects::{CellEncoding, GridObject, ObjectKind, ObjectRegistry};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    shape: Shape,
    cells: Vec<GridObject>,
}

#[derive(Deserialize)]
struct RawGrid {
    shape: Shape,
    cells: Vec<GridObject>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        if raw.cells.len() != raw.shape.len() {
            return Err(GridError::InvalidArgument(format!(
                "grid of shape {} needs {} cells, got {}",
                raw.shape,
                raw.shape.len(),
                raw.cells.len()
            )));
        }
        Ok(Grid { shape: raw.shape, cells: raw.cells })
    }
}

impl Grid {
    /// A `height` x `width` grid of floor.
    pub fn new(height: usize, width: usize) -> GridResult<Self> {
        let shape = Shape::new(height, width)?;
        Ok(Self { shape, cells: vec![GridObject::Floor; shape.len()] })
    }

    /// Builds a grid from a matrix of objects, one inner vector per row.
    pub fn from_objects(rows: Vec<Vec<GridObject>>) -> GridResult<Self> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        for (row, objects) in rows.iter().enumerate() {
            if objects.len() != width {
                return Err(GridError::ShapeMismatch { row, expected: width, found: objects.len() });
            }
        }

        let shape = Shape::new(height, width)?;
        Ok(Self { shape, cells: rows.into_iter().flatten().collect() })
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.shape.height()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.shape.width()
    }

    /// `((0, height - 1), (0, width - 1))`
    #[inline]
    pub fn area(&self) -> Area {
        self.shape.area()
    }

    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        self.shape.index_of(position).is_some()
    }

    pub fn positions(&self) -> AreaPositions {
        self.area().positions()
    }

    pub fn positions_border(&self) -> impl Iterator<Item = Position> + Clone {
        self.area().positions_border()
    }

    pub fn positions_inside(&self) -> AreaPositions {
        self.area().positions_inside()
    }

    fn index(&self, position: Position) -> GridResult<usize> {
        self.shape
            .index_of(position)
            .ok_or_else(|| GridError::OutOfBounds { position, area: self.area() })
    }

    pub fn get(&self, position: Position) -> GridResult<&GridObject> {
        let i = self.index(position)?;
        Ok(&self.cells[i])
    }

    pub fn get_mut(&mut self, position: Position) -> GridResult<&mut GridObject> {
        let i = self.index(position)?;
        Ok(&mut self.cells[i])
    }

    pub fn set(&mut self, position: Position, object: GridObject) -> GridResult<()> {
        self.replace(position, object).map(|_| ())
    }

    /// Stores `object` at `position` and returns what was there.
    pub fn replace(&mut self, position: Position, object: GridObject) -> GridResult<GridObject> {
        let i = self.index(position)?;
        Ok(std::mem::replace(&mut self.cells[i], object))
    }

    pub fn swap(&mut self, p: Position, q: Position) -> GridResult<()> {
        let i = self.index(p)?;
        let j = self.index(q)?;
        self.cells.swap(i, j);
        Ok(())
    }

    /// First position (row-major) holding an object equal to `object`.
    pub fn position_of(&self, object: &GridObject) -> Option<Position> {
        self.positions().zip(&self.cells).find(|(_, cell)| *cell == object).map(|(p, _)| p)
    }

    /// Kinds of the objects currently on the grid.
    pub fn object_kinds(&self) -> BTreeSet<ObjectKind> {
        self.cells.iter().map(GridObject::kind).collect()
    }

    /// Copy of `area`; cells outside this grid are `Hidden`.
    pub fn subgrid(&self, area: Area) -> Grid {
        let offset = area.top_left();
        let cells = area
            .shape()
            .area()
            .positions()
            .map(|local| match self.get(local + offset) {
                Ok(object) => object.clone(),
                Err(_) => GridObject::Hidden,
            })
            .collect();
        Grid { shape: area.shape(), cells }
    }

    /// The grid as seen by someone facing `orientation`, so that their
    /// forward direction points up.
    ///
    /// Facing `E`, the grid
    ///
    /// ```text
    /// AB
    /// CD
    /// ```
    ///
    /// becomes
    ///
    /// ```text
    /// BD
    /// AC
    /// ```
    pub fn change_orientation(&self, orientation: Orientation) -> Grid {
        if orientation == Orientation::N {
            return self.clone();
        }

        let shape = self.shape.rotated(orientation);
        let mut cells = vec![GridObject::Floor; shape.len()];
        for (position, object) in self.positions().zip(&self.cells) {
            let target = self.shape.rotate_position(position, orientation);
            if let Some(i) = shape.index_of(target) {
                cells[i] = object.clone();
            }
        }
        Grid { shape, cells }
    }

    /// Row-major compact encoding of every cell.
    pub fn encode(&self, registry: &ObjectRegistry) -> GridResult<Vec<CellEncoding>> {
        self.cells.iter().map(|object| registry.encode(object)).collect()
    }

    /// Rows of cell objects, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[GridObject]> {
        self.cells.chunks(self.shape.width())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for object in row {
                write!(f, "{}", object.render_as_char())?;
            }
        }
        Ok(())
    }
}

// ========== Tests ==========

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{Color, DoorStatus};

    fn letters() -> Grid {
        // A B
        // C D   (distinct objects stand in for letters)
        Grid::from_objects(vec![
            vec![GridObject::Wall, GridObject::Goal],
            vec![GridObject::key(Color::Red), GridObject::MovingObstacle],
        ])
        .unwrap()
    }

    #[test]
    fn test_new_is_floor() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.shape(), Shape::new(3, 4).unwrap());
        assert!(grid.positions().all(|p| *grid.get(p).unwrap() == GridObject::Floor));
        assert_eq!(grid.area().y_range(), (0, 2));
        assert_eq!(grid.area().x_range(), (0, 3));
        assert!(Grid::new(0, 4).is_err());
    }

    #[test]
    fn test_from_objects_rejects_ragged_rows() {
        let ragged = vec![vec![GridObject::Floor; 3], vec![GridObject::Floor; 2]];
        assert_eq!(
            Grid::from_objects(ragged),
            Err(GridError::ShapeMismatch { row: 1, expected: 3, found: 2 })
        );
        assert!(matches!(Grid::from_objects(vec![]), Err(GridError::InvalidArgument(_))));
    }

    #[test]
    fn test_get_set_bounds_checked() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set(Position::new(1, 0), GridObject::Wall).unwrap();
        assert_eq!(grid.get(Position::new(1, 0)).unwrap(), &GridObject::Wall);

        let before = grid.clone();
        let err = grid.set(Position::new(2, 0), GridObject::Goal).unwrap_err();
        assert!(err.is_out_of_bounds());
        assert!(grid.get(Position::new(0, -1)).is_err());
        assert_eq!(grid, before);

        let old = grid.replace(Position::new(1, 0), GridObject::Goal).unwrap();
        assert_eq!(old, GridObject::Wall);
    }

    #[test]
    fn test_swap() {
        let mut grid = letters();
        grid.swap(Position::new(0, 0), Position::new(1, 1)).unwrap();
        assert_eq!(grid.get(Position::new(0, 0)).unwrap(), &GridObject::MovingObstacle);
        assert_eq!(grid.get(Position::new(1, 1)).unwrap(), &GridObject::Wall);

        let before = grid.clone();
        assert!(grid.swap(Position::new(0, 0), Position::new(5, 5)).is_err());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_position_of_and_kinds() {
        let grid = letters();
        assert_eq!(grid.position_of(&GridObject::Goal), Some(Position::new(0, 1)));
        assert_eq!(grid.position_of(&GridObject::Hidden), None);

        let kinds = grid.object_kinds();
        assert_eq!(kinds.len(), 4);
        assert!(kinds.contains(&ObjectKind::Key));
        assert!(!kinds.contains(&ObjectKind::Floor));
    }

    #[test]
    fn test_subgrid_inside() {
        let grid = letters();
        let sub = grid.subgrid(Area::new((0, 0), (0, 1)).unwrap());
        assert_eq!(sub.shape(), Shape::new(1, 2).unwrap());
        assert_eq!(sub.get(Position::new(0, 1)).unwrap(), &GridObject::Goal);
    }

    #[test]
    fn test_subgrid_outside_is_hidden() {
        let grid = Grid::new(3, 3).unwrap();
        let sub = grid.subgrid(Area::new((-1, 1), (1, 3)).unwrap());
        assert_eq!(sub.shape(), Shape::new(3, 3).unwrap());

        for p in sub.positions() {
            let outside = p.y == 0 || p.x == 2;
            let expected = if outside { GridObject::Hidden } else { GridObject::Floor };
            assert_eq!(sub.get(p).unwrap(), &expected, "at {}", p);
        }
        assert!(!GridObject::Hidden.transparent());
    }

    #[test]
    fn test_subgrid_does_not_alias() {
        let grid = letters();
        let mut sub = grid.subgrid(grid.area());
        sub.set(Position::new(0, 0), GridObject::Floor).unwrap();
        assert_eq!(grid.get(Position::new(0, 0)).unwrap(), &GridObject::Wall);
    }

    #[test]
    fn test_change_orientation_east() {
        let grid = letters();
        let east = grid.change_orientation(Orientation::E);
        let expected = Grid::from_objects(vec![
            vec![GridObject::Goal, GridObject::MovingObstacle],
            vec![GridObject::Wall, GridObject::key(Color::Red)],
        ])
        .unwrap();
        assert_eq!(east, expected);
    }

    #[test]
    fn test_change_orientation_laws() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.set(Position::new(0, 0), GridObject::Wall).unwrap();
        grid.set(Position::new(1, 2), GridObject::door(DoorStatus::Open, Color::Blue)).unwrap();

        assert_eq!(grid.change_orientation(Orientation::N), grid);
        assert_eq!(
            grid.change_orientation(Orientation::S).change_orientation(Orientation::S),
            grid
        );
        assert_eq!(
            grid.change_orientation(Orientation::E).change_orientation(Orientation::W),
            grid
        );
        assert_eq!(grid.change_orientation(Orientation::E).shape(), Shape::new(3, 2).unwrap());
        assert_ne!(grid.change_orientation(Orientation::S), grid);
    }

    #[test]
    fn test_encode_and_display() {
        let grid = Grid::from_objects(vec![
            vec![GridObject::Wall, GridObject::Floor, GridObject::Goal],
            vec![
                GridObject::Hidden,
                GridObject::door(DoorStatus::Locked, Color::Red),
                GridObject::Wall,
            ],
        ])
        .unwrap();
        let registry = ObjectRegistry::standard();
        let encoded = grid.encode(registry).unwrap();
        assert_eq!(encoded.len(), 6);
        assert_eq!(encoded[4].state_index, 2);
        assert_eq!(encoded[4].color_index, Color::Red.index());

        assert_eq!(grid.to_string(), "# G\n.D#");
    }

    #[test]
    fn test_equality_is_structural() {
        let a = Grid::new(2, 3).unwrap();
        let b = Grid::new(2, 3).unwrap();
        let c = Grid::new(3, 2).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_serde_validates() {
        let grid = letters();
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(serde_json::from_str::<Grid>(&json).unwrap(), grid);

        let short = r#"{"shape":{"height":2,"width":2},"cells":[]}"#;
        assert!(serde_json::from_str::<Grid>(short).is_err());
        let empty = r#"{"shape":{"height":0,"width":3},"cells":[]}"#;
        assert!(serde_json::from_str::<Grid>(empty).is_err());
    }
}
