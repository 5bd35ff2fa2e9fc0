//! Minimax Chess Engine
//!
//! Fixed-depth minimax search with material evaluation.
//! The engine plays the opponent's replies with the same selection it uses
//! for itself.

mod config;
mod search;

use std::time::Instant;

use chess_core::{Engine, Position, Result, SearchResult};
use tracing::info;

pub use config::{ConfigError, EngineConfig};
pub use search::{search, select_move, SearchOptions, SearchOutcome, SearchVariant};

/// Chess engine choosing moves by fixed-depth minimax.
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    options: SearchOptions,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            options: config.options(),
            nodes: 0,
        }
    }

    pub fn with_depth(depth: u8) -> Self {
        Self {
            options: SearchOptions::depth(depth),
            nodes: 0,
        }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Total positions generated since the last new game.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Engine for MinimaxEngine {
    fn choose(&mut self, pos: &Position) -> Result<SearchResult> {
        let started = Instant::now();
        let outcome = search(pos, &self.options)?;
        self.nodes += outcome.nodes;

        info!(
            side = %pos.side_to_move(),
            from = %outcome.best_move.0,
            to = %outcome.best_move.1,
            score = outcome.score,
            nodes = outcome.nodes,
            elapsed = ?started.elapsed(),
            "engine move"
        );

        Ok(SearchResult {
            best: outcome.best,
            best_move: outcome.best_move,
            score: outcome.score,
            depth: self.options.depth,
            nodes: outcome.nodes,
        })
    }

    fn name(&self) -> &str {
        match self.options.variant {
            SearchVariant::Plain => "Minimax v1.0",
            SearchVariant::KingCapture => "Minimax v1.0 (king capture)",
        }
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
