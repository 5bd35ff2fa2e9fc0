pub mod board;
pub mod error;
pub mod eval;
pub mod game;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::{ChessError, Result};
pub use eval::KING_CAPTURED;
pub use game::*;
pub use movegen::destinations;
pub use notation::*;
pub use perft::perft;
pub use types::*;

// =============================================================================
// Engine trait — implemented by every move-selecting player
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Position after the chosen move
    pub best: Position,
    /// The chosen move as (from, to)
    pub best_move: (Square, Square),
    /// Material balance the engine expects after its lookahead (White-positive)
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of positions generated
    pub nodes: u64,
}

/// Trait that all chess engines must implement.
pub trait Engine: Send {
    /// Chooses a move for the side to move in `pos`.
    ///
    /// Fails with [`ChessError::NoLegalMoves`] when the side to move has none.
    fn choose(&mut self, pos: &Position) -> Result<SearchResult>;

    /// Returns the engine's name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
