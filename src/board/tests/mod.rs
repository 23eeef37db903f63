//! Unit test suites for the board engine.

mod codec;
mod eval;
mod search;

use crate::board::{Board, Move, Square};

/// Find the generated move from `from` to `to`, panicking if absent.
pub(crate) fn find_move(board: &Board, from: Square, to: Square) -> Move {
    let side = board.side_to_move();
    for &mv in &board.generate_moves(side) {
        if mv.from() == from && mv.to() == to {
            return mv;
        }
    }
    panic!("Expected move {from}{to} not found");
}
