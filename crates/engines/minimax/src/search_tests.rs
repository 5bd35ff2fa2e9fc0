use super::*;

fn s(coord: &str) -> Square {
    coord.parse().unwrap()
}

fn fen(fen: &str) -> Position {
    Position::from_fen(fen).unwrap()
}

fn opts(depth: u8, variant: SearchVariant, parallel: bool) -> SearchOptions {
    SearchOptions {
        depth,
        variant,
        parallel,
    }
}

#[test]
fn test_select_move_start_position() {
    let pos = Position::initial();
    let best = select_move(&pos, 2).unwrap();
    let (from, to) = best.last_move().unwrap();
    assert!(pos.is_legal_move(from, to));
    assert_eq!(best.side_to_move(), Side::Black);
}

#[test]
fn test_ties_go_to_first_enumerated_move() {
    // every opening move keeps material level; b1-a3 is generated first
    let best = select_move(&Position::initial(), 0).unwrap();
    assert_eq!(best.last_move(), Some((s("b1"), s("a3"))));
}

#[test]
fn test_depth_zero_only_scores_immediate_candidates() {
    let outcome = search(&Position::initial(), &SearchOptions::depth(0)).unwrap();
    assert_eq!(outcome.nodes, 20);
    assert_eq!(outcome.score, 0);

    let outcome = search(&Position::initial(), &SearchOptions::depth(1)).unwrap();
    assert_eq!(outcome.nodes, 20 + 20 * 20);
}

#[test]
fn test_white_takes_free_material() {
    let pos = fen("q3k3/8/8/8/8/8/8/R3K3 w");
    let outcome = search(&pos, &SearchOptions::depth(0)).unwrap();
    assert_eq!(outcome.best_move, (s("a1"), s("a8")));
    assert_eq!(outcome.score, 5);
}

#[test]
fn test_black_minimises_the_balance() {
    let pos = fen("r3k3/8/8/8/8/8/8/Q3K3 b");
    let outcome = search(&pos, &SearchOptions::depth(0)).unwrap();
    assert_eq!(outcome.best_move, (s("a8"), s("a1")));
    assert_eq!(outcome.score, -5);
}

#[test]
fn test_lookahead_avoids_defended_pawn() {
    // d5 is defended by the e6 pawn
    let pos = fen("4k3/8/4p3/3p4/8/8/8/3QK3 w");

    let greedy = search(&pos, &SearchOptions::depth(0)).unwrap();
    assert_eq!(greedy.best_move, (s("d1"), s("d5")));
    assert_eq!(greedy.score, 8);

    let careful = search(&pos, &SearchOptions::depth(1)).unwrap();
    assert_ne!(careful.best_move, (s("d1"), s("d5")));
    assert_eq!(careful.best_move, (s("d1"), s("d2")));
    assert_eq!(careful.score, 7);
}

#[test]
fn test_king_capture_is_chosen_at_every_depth() {
    let pos = fen("4k3/8/8/8/8/8/8/4RK2 w");
    for depth in 0..=2 {
        for variant in [SearchVariant::Plain, SearchVariant::KingCapture] {
            let outcome = search(&pos, &opts(depth, variant, false)).unwrap();
            assert_eq!(
                outcome.best_move,
                (s("e1"), s("e8")),
                "depth {depth} {variant:?}"
            );
            assert!(outcome.best.is_side_lost());
        }
    }
}

#[test]
fn test_king_capture_variant_searches_less() {
    let pos = fen("4k3/8/8/8/8/8/8/4RK2 w");
    let plain = search(&pos, &opts(2, SearchVariant::Plain, false)).unwrap();
    let short = search(&pos, &opts(2, SearchVariant::KingCapture, false)).unwrap();
    assert_eq!(plain.best_move, short.best_move);
    assert!(short.nodes < plain.nodes);
}

#[test]
fn test_no_legal_moves_fails() {
    let pos = fen("8/8/8/8/8/8/8/4K3 b");
    assert_eq!(select_move(&pos, 2).unwrap_err(), ChessError::NoLegalMoves);
    assert!(matches!(
        search(&pos, &opts(1, SearchVariant::Plain, true)),
        Err(ChessError::NoLegalMoves)
    ));
}

#[test]
fn test_opponent_without_reply_scores_candidate_itself() {
    // Black's only piece is the king; taking it leaves Black with no moves
    let pos = fen("7k/6Q1/8/8/8/8/8/K7 w");
    let outcome = search(&pos, &SearchOptions::depth(1)).unwrap();
    assert_eq!(outcome.best_move, (s("g7"), s("h8")));
    assert_eq!(outcome.score, 1009);
}

#[test]
fn test_parallel_matches_sequential() {
    for (pos, depth) in [
        (Position::initial(), 2),
        (fen("4k3/8/4p3/3p4/8/8/8/3QK3 w"), 1),
        (fen("r3k3/8/8/8/8/8/8/Q3K3 b"), 2),
    ] {
        let seq = search(&pos, &opts(depth, SearchVariant::Plain, false)).unwrap();
        let par = search(&pos, &opts(depth, SearchVariant::Plain, true)).unwrap();
        assert_eq!(seq.best, par.best);
        assert_eq!(seq.score, par.score);
        assert_eq!(seq.nodes, par.nodes);
    }
}

#[test]
fn test_parallel_king_capture_short_circuits() {
    let pos = fen("4k3/8/8/8/8/8/8/4RK2 w");
    let outcome = search(&pos, &opts(2, SearchVariant::KingCapture, true)).unwrap();
    assert_eq!(outcome.best_move, (s("e1"), s("e8")));
}

#[derive(Clone, Default)]
struct LogBuffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

impl std::io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Runs a search with a debug-level subscriber and returns what it logged.
fn logged_search(pos: &Position, options: &SearchOptions) -> String {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, || search(pos, options).unwrap());
    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn test_every_root_candidate_is_logged() {
    let pos = Position::initial();
    for parallel in [false, true] {
        let log = logged_search(&pos, &opts(1, SearchVariant::Plain, parallel));
        assert_eq!(
            log.matches("root candidate").count(),
            20,
            "parallel = {parallel}"
        );
        assert!(log.contains("from=b1 to=a3"));
        assert!(log.contains("search finished"));
    }
}
