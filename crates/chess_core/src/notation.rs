//! Text form of moves: two coordinates separated by whitespace, e.g. `"e2 e4"`.

use crate::error::{ChessError, Result};
use crate::types::Square;

pub fn parse_move(txt: &str) -> Result<(Square, Square)> {
    let mut parts = txt.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(from), Some(to), None) => Ok((from.parse()?, to.parse()?)),
        _ => Err(ChessError::InvalidMoveText(txt.to_string())),
    }
}

pub fn format_move(from: Square, to: Square) -> String {
    format!("{from} {to}")
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
