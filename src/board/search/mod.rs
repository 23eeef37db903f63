//! Adversarial search: depth-limited negamax with alpha-beta pruning and a
//! capture-only quiescence extension at the leaves.
//!
//! Every node speculatively applies pseudo-legal moves under a strict
//! snapshot -> attempt -> restore discipline; the board is restored
//! byte-for-byte around every attempt, legal or not.

mod alphabeta;
mod constants;
mod quiescence;

use log::debug;

use super::{Board, Move};

pub use constants::MATE_VALUE;
pub(crate) use constants::{INFINITY_SCORE, MAX_PLY};

/// Result of a fixed-depth search from the root.
#[derive(Debug, Clone, Copy)]
pub struct SearchOutcome {
    /// The best root move, or `None` when the root has no legal move
    /// (checkmate or stalemate) or the depth was zero. Callers must treat
    /// `None` as a terminal-state result, never as a playable move.
    pub best_move: Option<Move>,
    /// Score from the side to move's perspective (positive = good for the
    /// mover).
    pub score: i32,
    /// Nodes visited, quiescence included.
    pub nodes: u64,
}

/// Per-search bookkeeping threaded through the recursion.
pub(crate) struct SearchContext<'a> {
    pub(crate) board: &'a mut Board,
    pub(crate) nodes: u64,
    pub(crate) root_best: Option<Move>,
}

/// Search `board` to `depth` plies and report the best root move.
///
/// Depth 0 degenerates to the quiescence evaluation of the root. The
/// board is left exactly as it was passed in.
pub fn find_best_move(board: &mut Board, depth: u32) -> SearchOutcome {
    let side = board.side_to_move();
    let mut ctx = SearchContext {
        board,
        nodes: 0,
        root_best: None,
    };
    let score = ctx.negamax(depth, -INFINITY_SCORE, INFINITY_SCORE, 0);

    debug!(
        "search done: side={side} depth={depth} score={score} nodes={nodes} best={best}",
        nodes = ctx.nodes,
        best = ctx
            .root_best
            .map_or_else(|| "-".to_string(), |mv| mv.to_string()),
    );

    SearchOutcome {
        best_move: ctx.root_best,
        score,
        nodes: ctx.nodes,
    }
}
