use std::time::Instant;

use rayon::prelude::*;

use chess_core::{Position, perft};

/// Leaf counts under this engine's rules (no castling, en passant, promotion
/// or check filtering). Up to three plies these agree with standard chess.
const CASES: &[(&str, &[(u8, u64)])] = &[
    (
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w",
        &[(1, 20), (2, 400), (3, 8902)],
    ),
    // bare kings: 3 king moves each from the corners, 5 from the edge
    ("k7/8/8/8/8/8/8/4K3 w", &[(1, 5), (2, 15)]),
    // nothing to move
    ("8/8/8/8/8/8/8/4K3 b", &[(1, 0), (2, 0)]),
];

#[test]
fn perft_from_known_positions() {
    CASES.par_iter().for_each(|(fen, depths)| {
        let pos = Position::from_fen(fen).unwrap();
        let case_start = Instant::now();

        for &(depth, expected) in depths.iter() {
            let got = perft(&pos, depth);
            assert!(
                got == expected,
                "Perft mismatch for FEN '{}' at depth {}: expected {}, got {}",
                fen,
                depth,
                expected,
                got
            );
        }

        println!("{fen}: done in {:.3?}", case_start.elapsed());
    });
}

#[test]
fn perft_depth_zero_is_one() {
    assert_eq!(perft(&Position::initial(), 0), 1);
}
