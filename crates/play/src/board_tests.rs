use super::*;

#[test]
fn test_render_initial_board() {
    let text = render(&Position::initial(), false);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "8|♜|♞|♝|♛|♚|♝|♞|♜|");
    assert_eq!(lines[1], "7|♟|♟|♟|♟|♟|♟|♟|♟|");
    assert_eq!(lines[2], "6| |░| |░| |░| |░|");
    assert_eq!(lines[7], "1|♖|♘|♗|♕|♔|♗|♘|♖|");
    assert_eq!(lines[8], "  a b c d e f g h");
}

#[test]
fn test_last_destination_is_highlighted() {
    let from: Square = "e2".parse().unwrap();
    let to: Square = "e4".parse().unwrap();
    let pos = Position::initial().apply_move(from, to).unwrap();

    let colored = render(&pos, true);
    assert!(colored.contains("\x1b[91m♙\x1b[0m"));
    assert_eq!(colored.matches("\x1b[91m").count(), 1);

    assert!(!render(&pos, false).contains('\x1b'));
}
