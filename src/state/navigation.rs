//! Navigation-related state types.
//!
//! This module contains the input modes and the events fed into the state.

use crate::board::{Direction, Location, NavKey};

/// Specifying the different input modes.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Mode {
    Browse,
    Dragging,
}

/// Everything the front-end reports to the board, processed in arrival order.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum BoardEvent {
    /// Column handles are rendered and can take focus.
    ColumnsReady,
    /// Directional key for column focus.
    Key(NavKey),
    /// A drag gesture began on the item at this location.
    DragStarted(Location),
    /// Keyboard shift of the drop target.
    DragMoved(Direction),
    /// Pointer moved over a location, or outside every column.
    DragHovered(Option<Location>),
    /// The gesture finished, either by drop or by cancellation.
    DragEnded { cancelled: bool },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode() {
        assert_eq!(Mode::Browse, Mode::Browse);
        assert_ne!(Mode::Browse, Mode::Dragging);
    }

    #[test]
    fn test_board_event() {
        assert_eq!(
            BoardEvent::DragEnded { cancelled: true },
            BoardEvent::DragEnded { cancelled: true }
        );
        assert_ne!(
            BoardEvent::Key(NavKey::Left),
            BoardEvent::Key(NavKey::Right)
        );
    }
}
