//! Pseudo-legal move generation.
//!
//! One row-major scan over the grid, dispatching per piece kind; each
//! piece family contributes moves in a fixed sub-order, so the resulting
//! list is fully deterministic for a given position. Nothing here filters
//! for check safety; legality is decided after application.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attacks::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use super::types::{Color, MoveList, PieceKind, Square};
use super::Board;

impl Board {
    /// Enumerate every pseudo-legal move for `side`.
    #[must_use]
    pub fn generate_moves(&self, side: Color) -> MoveList {
        let mut moves = MoveList::new();
        for rank in 0..8 {
            for file in 0..8 {
                let from = Square(rank, file);
                let kind = self.piece_at(from);
                if !kind.belongs_to(side) {
                    continue;
                }
                match kind {
                    PieceKind::WhitePawn | PieceKind::BlackPawn => {
                        self.generate_pawn_moves(from, side, &mut moves);
                    }
                    PieceKind::WhiteBishop | PieceKind::BlackBishop => {
                        self.generate_sliding_moves(from, side, &BISHOP_DIRECTIONS, &mut moves);
                    }
                    PieceKind::WhiteKnight | PieceKind::BlackKnight => {
                        self.generate_knight_moves(from, side, &mut moves);
                    }
                    PieceKind::WhiteRook | PieceKind::BlackRook => {
                        self.generate_sliding_moves(from, side, &ROOK_DIRECTIONS, &mut moves);
                    }
                    PieceKind::WhiteQueen | PieceKind::BlackQueen => {
                        self.generate_sliding_moves(from, side, &BISHOP_DIRECTIONS, &mut moves);
                        self.generate_sliding_moves(from, side, &ROOK_DIRECTIONS, &mut moves);
                    }
                    PieceKind::WhiteKing | PieceKind::BlackKing => {
                        self.generate_king_moves(from, side, &mut moves);
                    }
                    PieceKind::Offboard | PieceKind::Empty => {}
                }
            }
        }
        moves
    }
}
