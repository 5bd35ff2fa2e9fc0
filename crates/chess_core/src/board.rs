use crate::error::{ChessError, Result};
use crate::types::*;

/// A board snapshot: piece placement, side to move, and the last move played.
///
/// Positions are values. Moving produces a new position and leaves the parent
/// untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    board: [Option<Piece>; 64],
    side_to_move: Side,
    last_move: Option<(Square, Square)>,
}

impl Position {
    /// Standard starting layout, White to move.
    pub fn initial() -> Self {
        let mut p = Position::empty(Side::White);

        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            p.board[f] = Some(Piece::new(kind, Side::White));
            p.board[8 + f] = Some(Piece::new(PieceKind::Pawn, Side::White));
            p.board[48 + f] = Some(Piece::new(PieceKind::Pawn, Side::Black));
            p.board[56 + f] = Some(Piece::new(kind, Side::Black));
        }
        p
    }

    /// A board with no pieces. Used with [`Position::with_piece`] to set up
    /// arbitrary positions.
    pub fn empty(side_to_move: Side) -> Self {
        Position {
            board: [None; 64],
            side_to_move,
            last_move: None,
        }
    }

    pub fn with_piece(mut self, sq: Square, piece: Piece) -> Self {
        self.board[sq.index()] = Some(piece);
        self
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board[sq.index()]
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Squares of the move that produced this position, if any.
    pub fn last_move(&self) -> Option<(Square, Square)> {
        self.last_move
    }

    /// Occupied squares in index order (a1, b1, ..., h8).
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.board
            .iter()
            .enumerate()
            .filter_map(|(i, pc)| pc.map(|pc| (Square::from_index(i), pc)))
    }

    pub fn piece_count(&self) -> usize {
        self.board.iter().flatten().count()
    }

    pub fn king_square(&self, side: Side) -> Option<Square> {
        self.pieces()
            .find(|(_, pc)| pc.side == side && pc.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Moves the piece on `from` to `to`, capturing whatever stood there.
    ///
    /// Legality is not checked; `from` only has to be occupied. Use
    /// [`Position::play`] for externally supplied moves.
    pub fn apply_move(&self, from: Square, to: Square) -> Result<Position> {
        let moved = self.piece_at(from).ok_or(ChessError::EmptySquare(from))?;
        Ok(self.moved(from, to, moved))
    }

    /// Validates `from -> to` against the legal move set, then applies it.
    pub fn play(&self, from: Square, to: Square) -> Result<Position> {
        if !self.is_legal_move(from, to) {
            return Err(ChessError::IllegalMove { from, to });
        }
        self.apply_move(from, to)
    }

    pub(crate) fn moved(&self, from: Square, to: Square, piece: Piece) -> Position {
        let mut next = self.clone();
        next.board[from.index()] = None;
        next.board[to.index()] = Some(piece);
        next.side_to_move = self.side_to_move.other();
        next.last_move = Some((from, to));
        next
    }

    // =========================================================================
    // FEN setup (placement and side to move only)
    // =========================================================================

    /// Parses the placement and side-to-move fields of a FEN string.
    ///
    /// Castling, en passant and clock fields are accepted but ignored since
    /// this engine does not model them.
    pub fn from_fen(fen: &str) -> Result<Self> {
        let bad = |msg: &str| ChessError::InvalidFen(format!("{msg}: '{fen}'"));

        let mut parts = fen.split_whitespace();
        let board_part = parts.next().ok_or_else(|| bad("empty string"))?;
        let side_to_move = match parts.next().unwrap_or("w") {
            "w" => Side::White,
            "b" => Side::Black,
            _ => return Err(bad("side to move must be 'w' or 'b'")),
        };

        let ranks: Vec<&str> = board_part.split('/').collect();
        if ranks.len() != 8 {
            return Err(bad("expected 8 ranks"));
        }

        let mut pos = Position::empty(side_to_move);
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
            let mut file: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as i8;
                    if file > 8 {
                        return Err(bad("too many files"));
                    }
                } else {
                    let kind = PieceKind::from_letter(ch).ok_or_else(|| bad("unknown piece"))?;
                    let side = if ch.is_ascii_uppercase() {
                        Side::White
                    } else {
                        Side::Black
                    };
                    let sq = Square::checked(file, rank).ok_or_else(|| bad("too many files"))?;
                    pos.board[sq.index()] = Some(Piece::new(kind, side));
                    file += 1;
                }
            }
            if file != 8 {
                return Err(bad("rank does not cover 8 files"));
            }
        }
        Ok(pos)
    }

    /// Placement and side-to-move fields of FEN.
    pub fn fen(&self) -> String {
        let mut s = String::new();
        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                match self.board[rank * 8 + file] {
                    Some(pc) => {
                        if empty > 0 {
                            s.push_str(&empty.to_string());
                            empty = 0;
                        }
                        s.push(pc.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                s.push_str(&empty.to_string());
            }
            if rank > 0 {
                s.push('/');
            }
        }
        s.push(' ');
        s.push(match self.side_to_move {
            Side::White => 'w',
            Side::Black => 'b',
        });
        s
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
