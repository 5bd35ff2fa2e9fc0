//! Error types for the chess core.
//!
//! Every failure is reported synchronously to the caller; the core never
//! retries or recovers on its own.

use crate::types::Square;

/// Errors that can occur while building or advancing positions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// Coordinates outside the 8x8 board
    #[error("square ({file}, {rank}) is off the board")]
    InvalidSquare { file: i8, rank: i8 },

    /// Move not present in the legal move set of the position
    #[error("illegal move {from} {to}")]
    IllegalMove { from: Square, to: Square },

    /// Move requested from a square with no piece on it
    #[error("no piece on {0}")]
    EmptySquare(Square),

    /// Search asked to choose from an empty legal move set
    #[error("no legal moves available")]
    NoLegalMoves,

    #[error("invalid coordinate '{0}', expected a file a-h and a rank 1-8")]
    InvalidCoordinate(String),

    #[error("invalid move '{0}', expected two coordinates such as 'e2 e4'")]
    InvalidMoveText(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// Undo requested before both sides have moved
    #[error("nothing to undo")]
    NothingToUndo,

    /// Game log that is not valid JSON of the expected shape
    #[error("invalid game record: {0}")]
    InvalidRecord(String),
}

/// Result type alias for chess core operations
pub type Result<T> = std::result::Result<T, ChessError>;
