//! Mate-in-one positions the engine must solve through the public API.

use gambit::{find_best_move, Board, MATE_VALUE};

fn best_move_uci(fen: &str, depth: u32) -> (String, i32) {
    let mut board = Board::from_fen(fen);
    let outcome = find_best_move(&mut board, depth);
    let mv = outcome.best_move.expect("expected a best move");
    (mv.to_string(), outcome.score)
}

#[test]
fn back_rank_mate_with_queen() {
    // White to move, Qe8# is mate
    let (uci, score) = best_move_uci("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1", 4);
    assert_eq!(uci, "e1e8", "Should find Qe8# (back rank mate)");
    assert!(score >= MATE_VALUE);
}

#[test]
fn back_rank_mate_with_rook() {
    // White to move, Ra8# is mate
    let (uci, score) = best_move_uci("6k1/5ppp/8/8/8/8/8/R6K w - - 0 1", 4);
    assert_eq!(uci, "a1a8", "Should find Ra8# (back rank mate)");
    assert!(score >= MATE_VALUE);
}

#[test]
fn smothered_corner_mate_with_knight() {
    // Black king trapped on h8 by its own pieces; Nf7# smothers it.
    let (uci, score) = best_move_uci("6rk/6pp/8/6N1/8/8/8/6K1 w - - 0 1", 4);
    assert_eq!(uci, "g5f7", "Should find Nf7# (smothered mate)");
    assert!(score >= MATE_VALUE);
}

#[test]
fn mated_side_reports_no_move() {
    // Black to move, already checkmated by the rook on a8.
    let mut board = Board::from_fen("R6k/6pp/8/8/8/8/8/7K b - - 0 1");
    let outcome = find_best_move(&mut board, 4);
    assert!(outcome.best_move.is_none());
    assert!(outcome.score <= -MATE_VALUE);
}
