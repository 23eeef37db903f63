pub mod board;

pub use board::{Board, BoardBuilder, CastlingRights, Color, Move, MoveList, PieceKind, Square};
pub use board::{find_best_move, SearchOutcome, MATE_VALUE};
