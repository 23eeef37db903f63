//! Destructive in-place move application with post-hoc legality checking.

use super::types::{Move, Square};
use super::Board;

impl Board {
    /// Apply `mv` for the side to move, mutating the board in place.
    ///
    /// Returns `true` iff the resulting position is legal, i.e. the
    /// mover's own king is not attacked afterward. Illegal attempts are an
    /// expected, frequent outcome of speculative application, not an
    /// error.
    ///
    /// The operation is destructive and has no internal undo: call sites
    /// must snapshot the full board beforehand and unconditionally restore
    /// it afterward, whether or not the move proved legal. Side-to-move
    /// toggling is deliberately not performed here; the search caller owns
    /// turn sequencing.
    pub fn apply_move(&mut self, mv: Move) -> bool {
        let side = self.side_to_move;
        let from = mv.from();
        let to = mv.to();

        let mover = self.piece_at(from);
        self.set_piece(to, mover);
        self.clear_square(from);

        if let Some(kind) = mv.promotion_kind() {
            self.set_piece(to, kind);
        }

        if mv.is_en_passant() {
            // The captured pawn sits one rank behind the target relative
            // to the mover's direction.
            if let Some(captured) = to.offset(-side.pawn_direction(), 0) {
                self.clear_square(captured);
            }
        }

        self.en_passant = if mv.is_double_push() {
            from.offset(side.pawn_direction(), 0)
        } else {
            None
        };

        if mv.is_castling() {
            let rank = to.rank();
            let (rook_from, rook_to) = if to.file() == 6 {
                (Square(rank, 7), Square(rank, 5))
            } else {
                (Square(rank, 0), Square(rank, 3))
            };
            let rook = self.piece_at(rook_from);
            self.set_piece(rook_to, rook);
            self.clear_square(rook_from);
        }

        // Covers king moves, rook moves, and rook captures uniformly.
        self.castling = self.castling.cleared_through(from).cleared_through(to);

        if mover.is_king() {
            self.kings[side.index()] = to;
        }

        !self.is_in_check(side)
    }
}
