//! Board construction error types.

/// Errors that can occur while assembling a board.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Two containers share a key
    #[error("Duplicate container key: {0}")]
    DuplicateContainerKey(String),

    /// An item id appears more than once across the board
    #[error("Duplicate item id: {0}")]
    DuplicateItemId(String),
}
