//! Error types for the engine.
//!
//! Ordinary play never fails: out-of-range lookups return `None` and illegal
//! moves are reported through `MoveResult::success`. Only construction with an
//! unusable size and snapshot encode/decode produce errors.

/// Errors raised when building a field or game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("field size {size} is too small (minimum is {min})")]
    InvalidSize { size: u8, min: u8 },
}

/// Errors raised by snapshot encoding and decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot truncated at byte {offset}")]
    Truncated { offset: usize },

    #[error("snapshot has {extra} unexpected trailing bytes")]
    TrailingBytes { extra: usize },

    #[error("invalid field size {0} in snapshot")]
    InvalidSize(u8),

    #[error("snapshot lists {count} balls but the field only has {capacity} cells")]
    TooManyBalls { count: usize, capacity: usize },

    #[error("cell ({x}, {y}) is outside a field of size {size}")]
    CellOutOfRange { x: u8, y: u8, size: u8 },

    #[error("cell ({x}, {y}) is listed twice")]
    DuplicateCell { x: u8, y: u8 },

    #[error("unknown color index {0}")]
    UnknownColor(u8),

    #[error("snapshot previews {0} next balls")]
    TooManyNextBalls(u8),

    #[error("{field} value {value} does not fit in one byte")]
    Overflow { field: &'static str, value: usize },
}
