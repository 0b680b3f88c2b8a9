//! Board domain module.
//!
//! This module holds the pure logic behind the board, independent of the
//! terminal front-end:
//! - Data model (`Item`, `Container`, `Board`, `Location`, `DragResult`)
//! - List editing and the drag-end dispatch policy
//! - Column focus tracking
//! - The in-progress drag gesture
//! - Placeholder seeding

mod drag;
mod error;
mod focus;
mod list_editor;
mod seed;

pub use drag::{DragSession, Direction};
pub use error::BoardError;
pub use focus::{ColumnFocusTracker, DragPhase, FocusSurface, NavKey};
pub use list_editor::{apply_drag_end, move_item, reorder};
pub use seed::{lorem_items, numbered_items, seed_board, ColumnSeed, Placeholder};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Stable key identifying a container.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerKey(String);

impl ContainerKey {
    pub fn new(key: impl Into<String>) -> Self {
        ContainerKey(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContainerKey {
    fn from(key: &str) -> Self {
        ContainerKey::new(key)
    }
}

impl From<String> for ContainerKey {
    fn from(key: String) -> Self {
        ContainerKey(key)
    }
}

/// A draggable item. Only its position ever changes.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: String,
    content: String,
}

impl Item {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Item {
            id: id.into(),
            content: content.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// An ordered sequence of items shown as one column.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub key: ContainerKey,
    pub title: String,
    pub items: Vec<Item>,
}

impl Container {
    pub fn new(key: impl Into<ContainerKey>, title: impl Into<String>, items: Vec<Item>) -> Self {
        Container {
            key: key.into(),
            title: title.into(),
            items,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A position used as a drag source or destination.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub container: ContainerKey,
    pub index: usize,
}

impl Location {
    pub fn new(container: impl Into<ContainerKey>, index: usize) -> Self {
        Location {
            container: container.into(),
            index,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.container, self.index)
    }
}

/// Outcome of a completed drag gesture. A missing destination means the item
/// was dropped outside every container.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragResult {
    pub source: Location,
    pub destination: Option<Location>,
}

/// Ordered collection of containers, looked up by key.
///
/// Container keys are unique and item ids are unique across all containers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    containers: Vec<Container>,
}

impl Board {
    /// Build a board, rejecting duplicate container keys or item ids.
    ///
    pub fn new(containers: Vec<Container>) -> Result<Self, BoardError> {
        let mut keys = HashSet::new();
        let mut ids = HashSet::new();
        for container in &containers {
            if !keys.insert(container.key.as_str()) {
                return Err(BoardError::DuplicateContainerKey(container.key.to_string()));
            }
            for item in &container.items {
                if !ids.insert(item.id()) {
                    return Err(BoardError::DuplicateItemId(item.id().to_string()));
                }
            }
        }
        Ok(Board { containers })
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    /// Keys in column order.
    ///
    pub fn keys(&self) -> Vec<ContainerKey> {
        self.containers.iter().map(|c| c.key.clone()).collect()
    }

    pub fn get(&self, key: &ContainerKey) -> Option<&Container> {
        self.containers.iter().find(|c| &c.key == key)
    }

    /// Column position of the container with the given key.
    ///
    pub fn position(&self, key: &ContainerKey) -> Option<usize> {
        self.containers.iter().position(|c| &c.key == key)
    }

    pub fn item_at(&self, location: &Location) -> Option<&Item> {
        self.get(&location.container)
            .and_then(|c| c.items.get(location.index))
    }

    /// Total number of items across all containers.
    ///
    pub fn item_count(&self) -> usize {
        self.containers.iter().map(Container::len).sum()
    }

    /// Return a copy of the board with one container's contents replaced.
    /// Unknown keys leave the copy unchanged.
    ///
    pub fn with_items(&self, key: &ContainerKey, items: Vec<Item>) -> Board {
        let mut board = self.clone();
        if let Some(container) = board.containers.iter_mut().find(|c| &c.key == key) {
            container.items = items;
        }
        board
    }
}
