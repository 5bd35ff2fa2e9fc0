//! Fixed-depth minimax over the full legal move tree.
//!
//! Every position is scored from White's side (`material_balance`); White
//! maximises and Black minimises. A candidate is scored by the material of the
//! reply the opponent would choose with one ply less of lookahead, so the
//! opponent is assumed to play this same selection. No pruning, no
//! transposition table: cost grows as branching factor ^ (depth + 1).

use chess_core::{ChessError, Position, Result, Side, Square};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which form of the selection to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchVariant {
    /// Score every candidate through the full recursion.
    #[default]
    Plain,
    /// Return a candidate that captures the enemy king at once, without
    /// searching the remaining candidates.
    KingCapture,
}

/// Parameters for a single search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Plies searched below each candidate
    pub depth: u8,
    pub variant: SearchVariant,
    /// Score root candidates on the rayon pool
    pub parallel: bool,
}

impl SearchOptions {
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            variant: SearchVariant::Plain,
            parallel: false,
        }
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::depth(3)
    }
}

/// What a search settled on.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Position after the chosen move
    pub best: Position,
    pub best_move: (Square, Square),
    /// White-positive material the chosen move is expected to lead to
    pub score: i32,
    /// Positions generated during the search
    pub nodes: u64,
}

/// Picks the best position reachable in one ply, looking `depth` further plies
/// ahead.
///
/// Fails with [`ChessError::NoLegalMoves`] when the side to move has no moves.
pub fn select_move(pos: &Position, depth: u8) -> Result<Position> {
    search(pos, &SearchOptions::depth(depth)).map(|outcome| outcome.best)
}

/// Runs the selection with explicit options and reports score and node count.
pub fn search(pos: &Position, opts: &SearchOptions) -> Result<SearchOutcome> {
    let mut nodes = 0u64;
    let chosen = if opts.parallel {
        choose_parallel(pos, opts.depth, opts.variant, &mut nodes)
    } else {
        choose(pos, opts.depth, opts.variant, true, &mut nodes)
    };
    let (best, score) = chosen.ok_or(ChessError::NoLegalMoves)?;
    // generated positions always record the move that produced them
    let best_move = best.last_move().ok_or(ChessError::NoLegalMoves)?;

    debug!(
        from = %best_move.0,
        to = %best_move.1,
        score,
        nodes,
        depth = opts.depth,
        "search finished"
    );

    Ok(SearchOutcome {
        best,
        best_move,
        score,
        nodes,
    })
}

/// True if `score` beats `best` for `mover`. Ties keep the earlier candidate.
#[inline]
fn improves(mover: Side, score: i32, best: i32) -> bool {
    match mover {
        Side::White => score > best,
        Side::Black => score < best,
    }
}

/// Recursive selection. Returns the chosen candidate and its score, or `None`
/// when there are no candidates. `root` logs every scored candidate.
fn choose(
    pos: &Position,
    depth: u8,
    variant: SearchVariant,
    root: bool,
    nodes: &mut u64,
) -> Option<(Position, i32)> {
    let mover = pos.side_to_move();
    let mut best: Option<(Position, i32)> = None;

    for candidate in pos.legal_moves() {
        *nodes += 1;

        if variant == SearchVariant::KingCapture && candidate.is_side_lost() {
            let score = candidate.material_balance();
            return Some((candidate, score));
        }

        let score = score_candidate(&candidate, depth, variant, nodes);
        if root {
            log_candidate(&candidate, score);
        }
        let better = match &best {
            Some((_, best_score)) => improves(mover, score, *best_score),
            None => true,
        };
        if better {
            best = Some((candidate, score));
        }
    }
    best
}

/// Material of the position the opponent's reply leads to. With no depth left,
/// or no reply available, the candidate itself is scored.
fn score_candidate(
    candidate: &Position,
    depth: u8,
    variant: SearchVariant,
    nodes: &mut u64,
) -> i32 {
    if depth == 0 {
        return candidate.material_balance();
    }
    match choose(candidate, depth - 1, variant, false, nodes) {
        Some((reply, _)) => reply.material_balance(),
        None => candidate.material_balance(),
    }
}

/// Same choice as [`choose`], with the root candidates scored in parallel.
///
/// The pick is made afterwards in enumeration order, so the result matches the
/// sequential search exactly.
fn choose_parallel(
    pos: &Position,
    depth: u8,
    variant: SearchVariant,
    nodes: &mut u64,
) -> Option<(Position, i32)> {
    let candidates: Vec<Position> = pos.legal_moves().collect();

    if variant == SearchVariant::KingCapture
        && let Some(idx) = candidates.iter().position(Position::is_side_lost)
    {
        *nodes += idx as u64 + 1;
        let capture = candidates[idx].clone();
        let score = capture.material_balance();
        return Some((capture, score));
    }

    let scored: Vec<(i32, u64)> = candidates
        .par_iter()
        .map(|candidate| {
            let mut local = 1u64;
            let score = score_candidate(candidate, depth, variant, &mut local);
            (score, local)
        })
        .collect();

    let mover = pos.side_to_move();
    let mut best: Option<(usize, i32)> = None;
    for (idx, &(score, local)) in scored.iter().enumerate() {
        *nodes += local;
        log_candidate(&candidates[idx], score);
        if best.is_none_or(|(_, best_score)| improves(mover, score, best_score)) {
            best = Some((idx, score));
        }
    }

    best.map(|(idx, score)| (candidates[idx].clone(), score))
}

fn log_candidate(candidate: &Position, score: i32) {
    if let Some((from, to)) = candidate.last_move() {
        debug!(from = %from, to = %to, score, "root candidate");
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
