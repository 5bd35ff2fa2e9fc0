//! Text rendering of a position for the terminal.

use chess_core::{Piece, PieceKind, Position, Side, Square};

const RED: &str = "\x1b[91m";
const RESET: &str = "\x1b[0m";

pub fn piece_symbol(pc: Piece) -> char {
    match (pc.side, pc.kind) {
        (Side::White, PieceKind::Pawn) => '♙',
        (Side::White, PieceKind::Knight) => '♘',
        (Side::White, PieceKind::Bishop) => '♗',
        (Side::White, PieceKind::Rook) => '♖',
        (Side::White, PieceKind::Queen) => '♕',
        (Side::White, PieceKind::King) => '♔',
        (Side::Black, PieceKind::Pawn) => '♟',
        (Side::Black, PieceKind::Knight) => '♞',
        (Side::Black, PieceKind::Bishop) => '♝',
        (Side::Black, PieceKind::Rook) => '♜',
        (Side::Black, PieceKind::Queen) => '♛',
        (Side::Black, PieceKind::King) => '♚',
    }
}

/// Board with rank 8 on top. The destination of the last move is drawn in red
/// when `color` is set.
pub fn render(pos: &Position, color: bool) -> String {
    let last_to = pos.last_move().map(|(_, to)| to);
    let mut s = String::new();

    for rank in (0..8i8).rev() {
        s.push_str(&(rank + 1).to_string());
        s.push('|');
        for file in 0..8i8 {
            let Ok(sq) = Square::new(file, rank) else {
                continue;
            };
            match pos.piece_at(sq) {
                Some(pc) if color && last_to == Some(sq) => {
                    s.push_str(RED);
                    s.push(piece_symbol(pc));
                    s.push_str(RESET);
                }
                Some(pc) => s.push(piece_symbol(pc)),
                None if (file + rank) % 2 == 1 => s.push(' '),
                None => s.push('░'),
            }
            s.push('|');
        }
        s.push('\n');
    }
    s.push_str("  a b c d e f g h");
    s
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
