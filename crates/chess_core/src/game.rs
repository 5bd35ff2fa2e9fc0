use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Position;
use crate::error::{ChessError, Result};
use crate::notation::{format_move, parse_move};
use crate::types::Square;

/// Persisted move log: every ply as `"e2 e4"` text, replayed from `start`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// FEN of the start position; absent for the standard initial position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    pub moves: Vec<String>,
}

impl GameRecord {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ChessError::InvalidRecord(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ChessError::InvalidRecord(e.to_string()))
    }
}

/// The positions of one game, oldest first. Each entry is derived from the
/// previous one by exactly one legal move.
#[derive(Debug, Clone)]
pub struct Game {
    positions: Vec<Position>,
}

impl Game {
    pub fn new() -> Self {
        Self::from_position(Position::initial())
    }

    pub fn from_position(start: Position) -> Self {
        Self {
            positions: vec![start],
        }
    }

    /// Rebuilds a game from the record's start position, validating every move.
    pub fn from_record(record: &GameRecord) -> Result<Self> {
        let start = match &record.start {
            Some(fen) => Position::from_fen(fen)?,
            None => Position::initial(),
        };
        let mut game = Game::from_position(start);
        for txt in &record.moves {
            let (from, to) = parse_move(txt)?;
            game.play(from, to)?;
        }
        Ok(game)
    }

    pub fn current(&self) -> &Position {
        // never empty: construction pushes a start position and undo keeps it
        &self.positions[self.positions.len() - 1]
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Number of plies played.
    pub fn ply_count(&self) -> usize {
        self.positions.len() - 1
    }

    /// Plays a validated move on the current position.
    pub fn play(&mut self, from: Square, to: Square) -> Result<&Position> {
        let next = self.current().play(from, to)?;
        self.positions.push(next);
        Ok(self.current())
    }

    /// Takes back the last ply of each side.
    pub fn undo(&mut self) -> Result<()> {
        if self.positions.len() < 3 {
            return Err(ChessError::NothingToUndo);
        }
        self.positions.truncate(self.positions.len() - 2);
        debug!(plies = self.ply_count(), "undid two plies");
        Ok(())
    }

    pub fn moves(&self) -> Vec<(Square, Square)> {
        self.positions[1..]
            .iter()
            .filter_map(Position::last_move)
            .collect()
    }

    pub fn record(&self) -> GameRecord {
        let start = &self.positions[0];
        GameRecord {
            start: (*start != Position::initial()).then(|| start.fen()),
            moves: self
                .moves()
                .into_iter()
                .map(|(from, to)| format_move(from, to))
                .collect(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
