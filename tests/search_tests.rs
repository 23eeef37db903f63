//! Search tests exercising the engine end to end through the public API.

use gambit::{find_best_move, Board, Color, Square};

/// The chosen move must always be a legal move of the position.
fn assert_returns_legal_move(fen: &str, depth: u32) {
    let mut board = Board::from_fen(fen);
    let outcome = find_best_move(&mut board, depth);
    let mv = outcome.best_move.expect("expected a best move");

    let side = board.side_to_move();
    assert!(
        board.generate_moves(side).iter().any(|m| *m == mv),
        "{mv} was not generated for this position"
    );

    let mut probe = board.clone();
    assert!(probe.apply_move(mv), "{mv} is not legal");
}

#[test]
fn startpos_returns_a_legal_move_at_increasing_depths() {
    for depth in [1, 2, 3, 4] {
        assert_returns_legal_move(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            depth,
        );
    }
}

#[test]
fn middlegame_returns_a_legal_move() {
    assert_returns_legal_move(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        3,
    );
}

#[test]
fn captures_free_material() {
    // Undefended black rook on a8 on an open file.
    let mut board = Board::from_fen("r6k/8/8/8/8/8/8/Q6K w - - 0 1");
    let outcome = find_best_move(&mut board, 3);
    let mv = outcome.best_move.expect("expected a best move");
    assert_eq!(mv.to(), Square(0, 0), "Should capture the hanging rook");
}

#[test]
fn does_not_hang_the_queen_for_nothing() {
    // Black pawn on d5 guards c4 and e4; the white queen must not land
    // there.
    let mut board = Board::from_fen("3qk3/8/8/3p4/8/8/3Q4/3K4 w - - 0 1");
    let outcome = find_best_move(&mut board, 3);
    let mv = outcome.best_move.expect("expected a best move");

    let guarded = [Square(4, 2), Square(4, 4)];
    if mv.from() == Square(6, 3) {
        assert!(
            !guarded.contains(&mv.to()),
            "queen moved onto a pawn-guarded square"
        );
    }
}

#[test]
fn forced_single_reply_is_found() {
    // White king a1 in check; Kxb2 is the only legal move.
    let mut board = Board::from_fen("k7/8/8/8/8/8/1q6/K7 w - - 0 1");
    let outcome = find_best_move(&mut board, 3);
    let mv = outcome.best_move.expect("expected the forced move");
    assert_eq!(mv.to_string(), "a1b2");
}

#[test]
fn stalemated_root_reports_terminal_state() {
    let mut board = Board::from_fen("k7/2Q5/8/8/8/8/8/4K3 b - - 0 1");
    let outcome = find_best_move(&mut board, 4);

    assert!(outcome.best_move.is_none());
    assert_eq!(outcome.score, 0);
    assert!(!board.is_in_check(Color::Black));
}

#[test]
fn search_does_not_disturb_the_position() {
    let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    let mut board = Board::from_fen(fen);
    let before = board.to_fen();
    find_best_move(&mut board, 3);
    assert_eq!(board.to_fen(), before);
}
