use crate::{board::Position, types::Side};

/// Score above which the side to move has captured the enemy king.
pub const KING_CAPTURED: i32 = 100;

impl Position {
    /// White-minus-Black material sum. Search scores every position from this
    /// fixed perspective.
    pub fn material_balance(&self) -> i32 {
        self.pieces().map(|(_, pc)| pc.signed_value()).sum()
    }

    /// Material from the side-to-move's perspective: positive means the side to
    /// move is ahead.
    pub fn material_score(&self) -> i32 {
        let score = self.material_balance();
        match self.side_to_move() {
            Side::White => score,
            Side::Black => -score,
        }
    }

    /// The side to move has lost its king.
    pub fn is_side_lost(&self) -> bool {
        self.material_score() < -KING_CAPTURED
    }

    /// The side to move has already captured the enemy king.
    pub fn is_side_won(&self) -> bool {
        self.material_score() > KING_CAPTURED
    }
}
