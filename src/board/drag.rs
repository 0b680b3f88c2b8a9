//! The in-progress drag gesture.
//!
//! A `DragSession` remembers where the item was lifted from and where it
//! would land if dropped now. Keyboard shifts keep the target on a valid
//! insertion index; pointer hovers may leave the target empty.

use super::{apply_drag_end, Board, ContainerKey, DragResult, Location};

/// Direction of a keyboard drag shift.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    source: Location,
    target: Option<Location>,
}

impl DragSession {
    /// Begin a gesture on the item at `source`.
    ///
    pub fn lift(source: Location) -> Self {
        DragSession {
            target: Some(source.clone()),
            source,
        }
    }

    pub fn source(&self) -> &Location {
        &self.source
    }

    pub fn target(&self) -> Option<&Location> {
        self.target.as_ref()
    }

    /// Highest insertion index in `key`. The source container loses the lifted
    /// item before insertion, so its range ends one earlier.
    ///
    pub fn max_index(&self, board: &Board, key: &ContainerKey) -> usize {
        let len = board.get(key).map(|c| c.len()).unwrap_or(0);
        if key == &self.source.container {
            len.saturating_sub(1)
        } else {
            len
        }
    }

    /// Move the target one step in `direction`.
    ///
    pub fn shift(&mut self, direction: Direction, board: &Board) {
        let current = self.target.clone().unwrap_or_else(|| self.source.clone());
        let next = match direction {
            Direction::Up => Location {
                index: current.index.saturating_sub(1),
                ..current
            },
            Direction::Down => {
                let max = self.max_index(board, &current.container);
                Location {
                    index: (current.index + 1).min(max),
                    ..current
                }
            }
            Direction::Left | Direction::Right => {
                let keys = board.keys();
                let position = board.position(&current.container).unwrap_or(0);
                let column = match direction {
                    Direction::Left => position.saturating_sub(1),
                    _ => (position + 1).min(keys.len().saturating_sub(1)),
                };
                match keys.get(column) {
                    Some(key) => Location {
                        index: current.index.min(self.max_index(board, key)),
                        container: key.clone(),
                    },
                    None => current,
                }
            }
        };
        self.target = Some(next);
    }

    /// Point the target at a hovered location, or at nothing.
    ///
    pub fn hover(&mut self, target: Option<Location>) {
        self.target = target;
    }

    /// Result of dropping at the current target.
    ///
    pub fn drop_result(&self) -> DragResult {
        DragResult {
            source: self.source.clone(),
            destination: self.target.clone(),
        }
    }

    /// Result of abandoning the gesture.
    ///
    pub fn cancel_result(&self) -> DragResult {
        DragResult {
            source: self.source.clone(),
            destination: None,
        }
    }

    /// The board as it would look if dropped now.
    ///
    pub fn preview(&self, board: &Board) -> Board {
        apply_drag_end(board, &self.drop_result())
    }
}
