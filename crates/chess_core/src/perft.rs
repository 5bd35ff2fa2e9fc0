use crate::board::Position;

/// Pure perft node count.
/// Counts all positions reachable from the current one in exactly `depth` plies.
pub fn perft(pos: &Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    if depth == 1 {
        return pos.move_pairs().len() as u64;
    }
    pos.legal_moves().map(|next| perft(&next, depth - 1)).sum()
}
