//! Error types for board validation.

use thiserror::Error;

/// Rejected board layouts. Boards are never corrected silently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("expected 9 tiles, got {0}")]
    WrongLength(usize),

    #[error("tile value {0} is outside 0..=8")]
    OutOfRange(u8),

    #[error("tile value {0} appears more than once")]
    Duplicate(u8),

    #[error("cannot parse board: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
