//! The mansion's room layout.
//!
//! Rooms form a fixed binary tree: every room leads to at most one room on
//! the left and one on the right. [`RoomGraph::construct`] builds the whole
//! mansion once; nothing adds, removes or rewires a room afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::debug;

pub const ENTRY_HALL: &str = "Entry Hall";
pub const LIBRARY: &str = "Library";
pub const KITCHEN: &str = "Kitchen";
pub const ATTIC: &str = "Attic";
pub const GARDEN: &str = "Garden";
pub const OFFICE: &str = "Office";
pub const BEDROOM: &str = "Bedroom";
pub const BASEMENT: &str = "Basement";

/// Error type for moving through the mansion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("No path {direction} from the {room}")]
    NoSuchPath { room: String, direction: Direction },
    #[error("Already in the {0}; there is no way back")]
    AtEntrance(String),
}

// ============================================================================
// Directions
// ============================================================================

/// Which child of a room to descend into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Left, Direction::Right];

    pub fn name(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Rooms
// ============================================================================

/// A room and the rooms it leads to.
///
/// Children are owned by their parent, so a room can never be reached from
/// two different places.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    name: String,
    left: Option<Box<Room>>,
    right: Option<Box<Room>>,
}

impl Room {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            left: None,
            right: None,
        }
    }

    pub fn with_left(mut self, room: Room) -> Self {
        self.left = Some(Box::new(room));
        self
    }

    pub fn with_right(mut self, room: Room) -> Self {
        self.right = Some(Box::new(room));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The room in `direction`, if there is one.
    pub fn child(&self, direction: Direction) -> Option<&Room> {
        match direction {
            Direction::Left => self.left.as_deref(),
            Direction::Right => self.right.as_deref(),
        }
    }

    /// Step into the room in `direction`.
    pub fn descend(&self, direction: Direction) -> Result<&Room, NavigationError> {
        self.child(direction).ok_or_else(|| NavigationError::NoSuchPath {
            room: self.name.clone(),
            direction,
        })
    }

    /// Directions that lead somewhere from here.
    pub fn exits(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.child(d).is_some())
            .collect()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Report this room to whoever is driving the game.
    pub fn visit(&self) -> Visit {
        debug!(room = %self.name, "visiting room");
        Visit {
            room: self.name.clone(),
            exits: self.exits(),
        }
    }
}

/// What a player sees on entering a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Visit {
    pub room: String,
    pub exits: Vec<Direction>,
}

impl fmt::Display for Visit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "You are in: {}", self.room)
    }
}

// ============================================================================
// Room Graph
// ============================================================================

/// The full mansion, rooted at the entry hall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomGraph {
    root: Room,
}

impl RoomGraph {
    /// Build the mansion.
    ///
    /// ```text
    /// Entry Hall
    /// ├── Library
    /// │   ├── Attic
    /// │   └── Garden
    /// └── Kitchen
    ///     ├── Office
    ///     └── Bedroom
    ///         └── Basement (left)
    /// ```
    pub fn construct() -> Self {
        let library = Room::new(LIBRARY)
            .with_left(Room::new(ATTIC))
            .with_right(Room::new(GARDEN));

        let bedroom = Room::new(BEDROOM).with_left(Room::new(BASEMENT));

        let kitchen = Room::new(KITCHEN)
            .with_left(Room::new(OFFICE))
            .with_right(bedroom);

        let root = Room::new(ENTRY_HALL)
            .with_left(library)
            .with_right(kitchen);

        Self { root }
    }

    pub fn root(&self) -> &Room {
        &self.root
    }

    /// Step from `current` into the room in `direction`.
    pub fn descend<'a>(
        &self,
        current: &'a Room,
        direction: Direction,
    ) -> Result<&'a Room, NavigationError> {
        current.descend(direction)
    }

    /// Follow `path` from the root.
    pub fn room_at(&self, path: &[Direction]) -> Result<&Room, NavigationError> {
        path.iter()
            .try_fold(&self.root, |room, &direction| room.descend(direction))
    }

    /// Every room, parents before children and left before right.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        let mut stack = vec![&self.root];
        std::iter::from_fn(move || {
            let room = stack.pop()?;
            stack.extend(room.right.as_deref());
            stack.extend(room.left.as_deref());
            Some(room)
        })
    }
}

impl Default for RoomGraph {
    fn default() -> Self {
        Self::construct()
    }
}
