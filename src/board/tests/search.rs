//! Search behavior tests: mate and stalemate resolution, pruning safety,
//! and board restoration around the whole search.

use crate::board::{find_best_move, Board, Color, Square, MATE_VALUE};

#[test]
fn back_rank_mate_scores_as_mate_for_the_mated_side() {
    // Black to move, in check from the rook on a8, no legal replies.
    let mut board = Board::from_fen("R6k/6pp/8/8/8/8/8/7K b - - 0 1");
    let outcome = find_best_move(&mut board, 3);

    assert!(outcome.best_move.is_none());
    assert!(outcome.score <= -MATE_VALUE);
}

#[test]
fn stalemate_scores_exactly_zero() {
    // Black to move, not in check, and every king step is covered by the
    // queen on c7.
    let mut board = Board::from_fen("k7/2Q5/8/8/8/8/8/4K3 b - - 0 1");
    assert!(!board.is_in_check(Color::Black));

    let outcome = find_best_move(&mut board, 3);
    assert!(outcome.best_move.is_none());
    assert_eq!(outcome.score, 0);
}

#[test]
fn finds_back_rank_mate_in_one() {
    // Qe1-e8 is mate: the black king is boxed in by its own pawns.
    let mut board = Board::from_fen("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1");
    let outcome = find_best_move(&mut board, 3);

    let mv = outcome.best_move.expect("mate in one not found");
    assert_eq!(mv.from(), Square(7, 4));
    assert_eq!(mv.to(), Square(0, 4));
    assert!(outcome.score >= MATE_VALUE);
}

#[test]
fn prefers_the_shallower_mate() {
    // Mate in one is available; its score must dominate any deeper mate
    // the search can also see at this depth.
    let mut board = Board::from_fen("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1");
    let shallow = find_best_move(&mut board, 2).score;
    let deep = find_best_move(&mut board, 4).score;

    // Same mate, found with more remaining depth, scores higher.
    assert!(deep >= shallow);
    assert!(shallow >= MATE_VALUE);
}

#[test]
fn captures_the_hanging_rook() {
    // Open a-file, undefended black rook on a8.
    let mut board = Board::from_fen("r6k/8/8/8/8/8/8/Q6K w - - 0 1");
    let outcome = find_best_move(&mut board, 2);

    let mv = outcome.best_move.expect("no move found");
    assert_eq!(mv.to(), Square(0, 0));
    assert!(mv.is_capture());
    assert!(outcome.score > 300);
}

#[test]
fn only_legal_move_is_played() {
    // White king a1 in check from the queen on b2; Kxb2 is the only reply.
    let mut board = Board::from_fen("k7/8/8/8/8/8/1q6/K7 w - - 0 1");
    let outcome = find_best_move(&mut board, 2);

    let mv = outcome.best_move.expect("forced move not found");
    assert_eq!(mv.from(), Square(7, 0));
    assert_eq!(mv.to(), Square(6, 1));
}

#[test]
fn depth_zero_returns_the_static_standpoint() {
    let mut board = Board::new();
    let outcome = find_best_move(&mut board, 0);
    assert!(outcome.best_move.is_none());
    assert_eq!(outcome.score, 0);
}

#[test]
fn search_restores_the_board() {
    let mut board =
        Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    let before = board.clone();
    find_best_move(&mut board, 3);
    assert_eq!(board, before);
}

#[test]
fn reported_score_is_from_the_movers_perspective() {
    // Black to move and up a queen: the mover's score is positive.
    let mut board = Board::from_fen("q6k/8/8/8/8/8/8/7K b - - 0 1");
    let outcome = find_best_move(&mut board, 2);
    assert!(outcome.score > 0);
}
