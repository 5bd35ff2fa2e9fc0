use crate::{board::Position, types::*};

const ORTHOGONAL: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
];

impl Position {
    /// Every position reachable in one ply by the side to move.
    ///
    /// Ordered by origin square (a1 .. h8), then by the piece's own rule
    /// order. No check or pin filtering is done: leaving one's own king
    /// capturable is allowed. Call again to restart.
    pub fn legal_moves(&self) -> impl Iterator<Item = Position> + '_ {
        self.pieces()
            .filter(move |(_, pc)| pc.side == self.side_to_move())
            .flat_map(move |(from, pc)| {
                destinations(self, from, pc)
                    .into_iter()
                    .map(move |to| self.moved(from, to, pc))
            })
    }

    /// The legal move set as `(from, to)` pairs, in the same order as
    /// [`Position::legal_moves`].
    pub fn move_pairs(&self) -> Vec<(Square, Square)> {
        let mut out = Vec::with_capacity(64);
        for (from, pc) in self.pieces() {
            if pc.side != self.side_to_move() {
                continue;
            }
            out.extend(destinations(self, from, pc).into_iter().map(|to| (from, to)));
        }
        out
    }

    pub fn is_legal_move(&self, from: Square, to: Square) -> bool {
        match self.piece_at(from) {
            Some(pc) if pc.side == self.side_to_move() => {
                destinations(self, from, pc).contains(&to)
            }
            _ => false,
        }
    }
}

/// Destination squares for `pc` standing on `from`.
pub fn destinations(pos: &Position, from: Square, pc: Piece) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    match pc.kind {
        PieceKind::Pawn => gen_pawn(pos, from, pc.side, &mut out),
        PieceKind::Knight => gen_knight(pos, from, pc.side, &mut out),
        PieceKind::Bishop => gen_slider(pos, from, pc.side, &DIAGONAL, 7, &mut out),
        PieceKind::Rook => gen_slider(pos, from, pc.side, &ORTHOGONAL, 7, &mut out),
        PieceKind::Queen => gen_slider(pos, from, pc.side, &ALL_DIRECTIONS, 7, &mut out),
        PieceKind::King => gen_slider(pos, from, pc.side, &ALL_DIRECTIONS, 1, &mut out),
    }
    out
}

fn gen_pawn(pos: &Position, from: Square, side: Side, out: &mut Vec<Square>) {
    let dir = side.forward();

    // forward 1, and forward 2 from the start rank if both squares are free
    if let Some(to) = from.offset(0, dir)
        && pos.piece_at(to).is_none()
    {
        out.push(to);
        if from.rank() == side.pawn_start_rank() as i8
            && let Some(to2) = from.offset(0, 2 * dir)
            && pos.piece_at(to2).is_none()
        {
            out.push(to2);
        }
    }

    // diagonal captures only
    for df in [-1, 1] {
        if let Some(to) = from.offset(df, dir)
            && let Some(target) = pos.piece_at(to)
            && target.side != side
        {
            out.push(to);
        }
    }
}

fn gen_knight(pos: &Position, from: Square, side: Side, out: &mut Vec<Square>) {
    for (df, dr) in KNIGHT_JUMPS {
        if let Some(to) = from.offset(df, dr) {
            match pos.piece_at(to) {
                Some(pc) if pc.side == side => {}
                _ => out.push(to),
            }
        }
    }
}

/// Rays from `from`, at most `limit` steps each. Empty squares are yielded and
/// the ray continues; an opposing piece is yielded and ends the ray; an own
/// piece ends it without being yielded.
fn gen_slider(
    pos: &Position,
    from: Square,
    side: Side,
    dirs: &[(i8, i8)],
    limit: i8,
    out: &mut Vec<Square>,
) {
    for &(df, dr) in dirs {
        for step in 1..=limit {
            let Some(to) = from.offset(df * step, dr * step) else {
                break;
            };
            match pos.piece_at(to) {
                None => out.push(to),
                Some(pc) => {
                    if pc.side != side {
                        out.push(to);
                    }
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
