//! Cell objects: the closed set of things a grid cell can hold.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Color;
use crate::error::{GridError, GridResult};

// =============================================================================
// ObjectKind
// =============================================================================

/// Variant tag of a [`GridObject`], without per-object data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ObjectKind {
    None,
    Hidden,
    Floor,
    Wall,
    Goal,
    Door,
    Key,
    MovingObstacle,
    Box,
}

impl ObjectKind {
    /// Every kind, in standard registration order.
    pub const ALL: [ObjectKind; 9] = [
        ObjectKind::None,
        ObjectKind::Hidden,
        ObjectKind::Floor,
        ObjectKind::Wall,
        ObjectKind::Goal,
        ObjectKind::Door,
        ObjectKind::Key,
        ObjectKind::MovingObstacle,
        ObjectKind::Box,
    ];

    /// (CamelCase, snake_case)
    fn names(self) -> (&'static str, &'static str) {
        match self {
            ObjectKind::None => ("NoneGridObject", "none_grid_object"),
            ObjectKind::Hidden => ("Hidden", "hidden"),
            ObjectKind::Floor => ("Floor", "floor"),
            ObjectKind::Wall => ("Wall", "wall"),
            ObjectKind::Goal => ("Goal", "goal"),
            ObjectKind::Door => ("Door", "door"),
            ObjectKind::Key => ("Key", "key"),
            ObjectKind::MovingObstacle => ("MovingObstacle", "moving_obstacle"),
            ObjectKind::Box => ("Box", "box"),
        }
    }

    pub fn name(self) -> &'static str {
        self.names().0
    }

    pub fn snake_name(self) -> &'static str {
        self.names().1
    }

    /// Accepts both the CamelCase and the snake_case spelling.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| {
            let (camel, snake) = kind.names();
            camel == name || snake == name
        })
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// DoorStatus
// =============================================================================

/// Door state; the discriminant is the door's state index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DoorStatus {
    Open = 0,
    Closed = 1,
    Locked = 2,
}

impl DoorStatus {
    pub const COUNT: u8 = 3;

    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }
}

impl FromStr for DoorStatus {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "OPEN" => Ok(DoorStatus::Open),
            "CLOSED" => Ok(DoorStatus::Closed),
            "LOCKED" => Ok(DoorStatus::Locked),
            _ => Err(GridError::InvalidArgument(format!("unknown door status '{}'", s))),
        }
    }
}

// =============================================================================
// GridObject
// =============================================================================

/// Content of a single grid cell.
///
/// `Hidden` stands for "not observable" and is what out-of-world or
/// occluded cells turn into; `None` is what an agent holds when its hands
/// are empty and never appears in a world grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridObject {
    #[serde(rename = "none_grid_object")]
    None,
    Hidden,
    #[default]
    Floor,
    Wall,
    Goal,
    Door {
        status: DoorStatus,
        color: Color,
    },
    Key {
        color: Color,
    },
    MovingObstacle,
    /// A box hiding another object, possibly another box.
    Box {
        content: std::boxed::Box<GridObject>,
    },
}

impl GridObject {
    pub fn door(status: DoorStatus, color: Color) -> Self {
        GridObject::Door { status, color }
    }

    pub fn key(color: Color) -> Self {
        GridObject::Key { color }
    }

    pub fn boxed(content: GridObject) -> Self {
        GridObject::Box { content: std::boxed::Box::new(content) }
    }

    pub fn kind(&self) -> ObjectKind {
        match self {
            GridObject::None => ObjectKind::None,
            GridObject::Hidden => ObjectKind::Hidden,
            GridObject::Floor => ObjectKind::Floor,
            GridObject::Wall => ObjectKind::Wall,
            GridObject::Goal => ObjectKind::Goal,
            GridObject::Door { .. } => ObjectKind::Door,
            GridObject::Key { .. } => ObjectKind::Key,
            GridObject::MovingObstacle => ObjectKind::MovingObstacle,
            GridObject::Box { .. } => ObjectKind::Box,
        }
    }

    /// Whether sight passes through the cell.
    pub fn transparent(&self) -> bool {
        match self {
            GridObject::None | GridObject::Hidden | GridObject::Wall => false,
            GridObject::Door { status, .. } => *status == DoorStatus::Open,
            GridObject::Floor
            | GridObject::Goal
            | GridObject::Key { .. }
            | GridObject::MovingObstacle
            | GridObject::Box { .. } => true,
        }
    }

    /// Whether movement into the cell is prevented.
    pub fn blocks(&self) -> bool {
        match self {
            GridObject::Hidden | GridObject::Wall | GridObject::Box { .. } => true,
            GridObject::Door { status, .. } => *status != DoorStatus::Open,
            GridObject::None
            | GridObject::Floor
            | GridObject::Goal
            | GridObject::Key { .. }
            | GridObject::MovingObstacle => false,
        }
    }

    pub fn can_be_picked_up(&self) -> bool {
        matches!(self, GridObject::Key { .. })
    }

    pub fn color(&self) -> Color {
        match self {
            GridObject::Door { color, .. } | GridObject::Key { color } => *color,
            _ => Color::None,
        }
    }

    /// Internal state index used by the compact encoding.
    pub fn state_index(&self) -> u8 {
        match self {
            GridObject::Door { status, .. } => status.index(),
            _ => 0,
        }
    }

    /// Number of internal states (0 for stateless kinds).
    pub fn num_states(&self) -> u8 {
        match self {
            GridObject::Door { .. } => DoorStatus::COUNT,
            _ => 0,
        }
    }

    /// Whether the object may appear in a fully observable world grid.
    pub fn can_be_represented_in_state(&self) -> bool {
        !matches!(self, GridObject::Hidden | GridObject::Box { .. })
    }

    pub fn render_as_char(&self) -> char {
        match self {
            GridObject::None | GridObject::Floor => ' ',
            GridObject::Hidden => '.',
            GridObject::Wall => '#',
            GridObject::Goal => 'G',
            GridObject::Door { status: DoorStatus::Open, .. } => '_',
            GridObject::Door { status: DoorStatus::Closed, .. } => 'd',
            GridObject::Door { status: DoorStatus::Locked, .. } => 'D',
            GridObject::Key { .. } => 'K',
            GridObject::MovingObstacle => '*',
            GridObject::Box { .. } => 'b',
        }
    }

    /// Builds an object from its kind name (CamelCase or snake_case).
    ///
    /// Doors need `status` and `color`, keys need `color` and boxes need
    /// `content`; missing ones fail with `MissingParameter`.
    pub fn from_name(name: &str, params: ObjectParams) -> GridResult<Self> {
        let kind =
            ObjectKind::from_name(name).ok_or_else(|| GridError::UnknownObject(name.to_string()))?;
        let missing = |parameter| GridError::MissingParameter { object: kind, parameter };

        let object = match kind {
            ObjectKind::None => GridObject::None,
            ObjectKind::Hidden => GridObject::Hidden,
            ObjectKind::Floor => GridObject::Floor,
            ObjectKind::Wall => GridObject::Wall,
            ObjectKind::Goal => GridObject::Goal,
            ObjectKind::MovingObstacle => GridObject::MovingObstacle,
            ObjectKind::Door => GridObject::Door {
                status: params.status.ok_or_else(|| missing("status"))?,
                color: params.color.ok_or_else(|| missing("color"))?,
            },
            ObjectKind::Key => {
                GridObject::Key { color: params.color.ok_or_else(|| missing("color"))? }
            }
            ObjectKind::Box => GridObject::boxed(params.content.ok_or_else(|| missing("content"))?),
        };
        Ok(object)
    }
}

/// Optional construction parameters for [`GridObject::from_name`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectParams {
    #[serde(default)]
    pub status: Option<DoorStatus>,
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub content: Option<GridObject>,
}

impl ObjectParams {
    pub fn with_status(mut self, status: DoorStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_content(mut self, content: GridObject) -> Self {
        self.content = Some(content);
        self
    }
}

// ========== Tests ==========

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_properties() {
        let floor = GridObject::Floor;
        assert!(floor.transparent());
        assert!(!floor.blocks());
        assert_eq!(floor.color(), Color::None);
        assert!(!floor.can_be_picked_up());
        assert_eq!(floor.state_index(), 0);
        assert!(floor.can_be_represented_in_state());
        assert_eq!(floor.render_as_char(), ' ');
        assert_eq!(floor.num_states(), 0);
        assert_eq!(GridObject::default(), floor);
    }

    #[test]
    fn test_wall_and_goal_properties() {
        let wall = GridObject::Wall;
        assert!(!wall.transparent());
        assert!(wall.blocks());
        assert_eq!(wall.render_as_char(), '#');

        let goal = GridObject::Goal;
        assert!(goal.transparent());
        assert!(!goal.blocks());
        assert_eq!(goal.render_as_char(), 'G');
    }

    #[test]
    fn test_hidden_and_none_properties() {
        let hidden = GridObject::Hidden;
        assert!(!hidden.transparent());
        assert_eq!(hidden.color(), Color::None);
        assert_eq!(hidden.state_index(), 0);
        assert!(!hidden.can_be_represented_in_state());
        assert_eq!(hidden.render_as_char(), '.');

        let none = GridObject::None;
        assert_eq!(none.color(), Color::None);
        assert!(none.can_be_represented_in_state());
        assert_eq!(none.render_as_char(), ' ');
        assert_eq!(none.num_states(), 0);
    }

    #[test]
    fn test_door_properties() {
        let open = GridObject::door(DoorStatus::Open, Color::Green);
        assert!(open.transparent());
        assert!(!open.blocks());
        assert_eq!(open.color(), Color::Green);
        assert_eq!(open.state_index(), 0);
        assert_eq!(open.render_as_char(), '_');
        assert_eq!(open.num_states(), 3);

        let closed = GridObject::door(DoorStatus::Closed, Color::None);
        assert!(!closed.transparent());
        assert!(closed.blocks());
        assert_eq!(closed.state_index(), 1);
        assert_eq!(closed.render_as_char(), 'd');

        let locked = GridObject::door(DoorStatus::Locked, Color::None);
        assert!(!locked.transparent());
        assert!(locked.blocks());
        assert_eq!(locked.state_index(), 2);
        assert_eq!(locked.render_as_char(), 'D');
        assert!(!locked.can_be_picked_up());
    }

    #[test]
    fn test_key_and_obstacle_properties() {
        let key = GridObject::key(Color::Yellow);
        assert!(key.transparent());
        assert!(!key.blocks());
        assert!(key.can_be_picked_up());
        assert_eq!(key.color(), Color::Yellow);

        let obstacle = GridObject::MovingObstacle;
        assert!(obstacle.transparent());
        assert!(!obstacle.blocks());
        assert_eq!(obstacle.render_as_char(), '*');
    }

    #[test]
    fn test_box_properties() {
        let nested = GridObject::boxed(GridObject::boxed(GridObject::boxed(GridObject::Floor)));
        assert!(nested.transparent());
        assert!(nested.blocks());
        assert!(!nested.can_be_picked_up());
        assert!(!nested.can_be_represented_in_state());
        assert_eq!(nested.render_as_char(), 'b');

        match nested {
            GridObject::Box { content } => assert_eq!(content.kind(), ObjectKind::Box),
            other => panic!("expected a box, got {:?}", other),
        }
    }

    #[test]
    fn test_kind_names() {
        for kind in ObjectKind::ALL {
            assert_eq!(ObjectKind::from_name(kind.name()), Some(kind));
            assert_eq!(ObjectKind::from_name(kind.snake_name()), Some(kind));
        }
        assert_eq!(ObjectKind::from_name("none_grid_object"), Some(ObjectKind::None));
        assert_eq!(ObjectKind::from_name("invalid"), None);
    }

    #[test]
    fn test_kind_names_are_distinct() {
        let names: std::collections::HashSet<_> =
            ObjectKind::ALL.iter().flat_map(|k| [k.name(), k.snake_name()]).collect();
        assert_eq!(names.len(), 2 * ObjectKind::ALL.len());
        assert_eq!(ObjectKind::MovingObstacle.name(), "MovingObstacle");
        assert_eq!(ObjectKind::MovingObstacle.snake_name(), "moving_obstacle");
        assert_eq!(ObjectKind::None.to_string(), "NoneGridObject");
    }

    #[test]
    fn test_factory_valid() {
        let door_params = ObjectParams::default().with_status(DoorStatus::Locked).with_color(Color::Red);
        for name in ["Door", "door"] {
            assert_eq!(
                GridObject::from_name(name, door_params.clone()).unwrap(),
                GridObject::door(DoorStatus::Locked, Color::Red)
            );
        }
        assert_eq!(
            GridObject::from_name("key", ObjectParams::default().with_color(Color::Red)).unwrap(),
            GridObject::key(Color::Red)
        );
        assert_eq!(
            GridObject::from_name("Box", ObjectParams::default().with_content(GridObject::Floor))
                .unwrap(),
            GridObject::boxed(GridObject::Floor)
        );
        for name in ["Hidden", "floor", "Wall", "goal", "MovingObstacle", "NoneGridObject"] {
            assert!(GridObject::from_name(name, ObjectParams::default()).is_ok(), "{}", name);
        }
    }

    #[test]
    fn test_factory_invalid() {
        assert_eq!(
            GridObject::from_name("invalid", ObjectParams::default()),
            Err(GridError::UnknownObject("invalid".to_string()))
        );
        for name in ["Door", "door", "Key", "key", "Box", "box"] {
            assert!(matches!(
                GridObject::from_name(name, ObjectParams::default()),
                Err(GridError::MissingParameter { .. })
            ));
        }
        let half_door = ObjectParams::default().with_status(DoorStatus::Open);
        assert_eq!(
            GridObject::from_name("door", half_door),
            Err(GridError::MissingParameter { object: ObjectKind::Door, parameter: "color" })
        );
    }

    #[test]
    fn test_params_from_json() {
        let params: ObjectParams =
            serde_json::from_str(r#"{"status":"LOCKED","color":"RED"}"#).unwrap();
        assert_eq!(params.status, Some(DoorStatus::Locked));
        assert_eq!(params.color, Some(Color::Red));
        assert!(params.content.is_none());
    }

    #[test]
    fn test_object_serde_round_trip() {
        let obj = GridObject::boxed(GridObject::door(DoorStatus::Closed, Color::Blue));
        let json = serde_json::to_string(&obj).unwrap();
        let parsed: GridObject = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, obj);
    }
}
