//! Fixed-position, fixed-depth demo entry point.
//!
//! Loads a test position, prints it, searches to a fixed depth, and
//! reports the chosen move. All real interfaces of the engine are the
//! library APIs; this binary is glue.

use gambit::{find_best_move, Board};

/// A tactically busy middlegame position (Kiwipete).
const TEST_POSITION: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

const SEARCH_DEPTH: u32 = 5;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut board = Board::try_from_fen(TEST_POSITION)?;
    println!("{board}");

    let outcome = find_best_move(&mut board, SEARCH_DEPTH);
    match outcome.best_move {
        Some(mv) => println!(
            "best move: {mv} (score {}, {} nodes)",
            outcome.score, outcome.nodes
        ),
        None => {
            // No legal reply at the root: report the verdict instead of
            // trying to play a null move.
            let side = board.side_to_move();
            if board.is_in_check(side) {
                println!("{side} is checkmated");
            } else {
                println!("{side} is stalemated");
            }
        }
    }

    Ok(())
}
