use super::super::attacks::KING_OFFSETS;
use super::super::types::{Color, Move, MoveList, PieceKind, Square};
use super::super::Board;

impl Board {
    /// King steps plus castling.
    ///
    /// Castling requires the rights bit, empty squares strictly between
    /// king and rook, and the king's square plus every transit square
    /// (destination included) free of enemy attack. The emitted move
    /// carries the castling flag with the king's final square as target;
    /// the rook is relocated during application.
    pub(crate) fn generate_king_moves(&self, from: Square, side: Color, moves: &mut MoveList) {
        for &(dr, df) in &KING_OFFSETS {
            let Some(to) = from.offset(dr, df) else {
                continue;
            };
            let target = self.piece_at(to);
            if target == PieceKind::Empty {
                moves.push(Move::quiet(from, to));
            } else if target.is_enemy_of(side) {
                moves.push(Move::capture(from, to));
            }
        }

        let back = side.back_rank();
        if from != Square(back, 4) {
            return;
        }
        let enemy = side.opponent();

        if self.castling.has(side, true)
            && self.is_empty(Square(back, 5))
            && self.is_empty(Square(back, 6))
            && !self.is_square_attacked(Square(back, 4), enemy)
            && !self.is_square_attacked(Square(back, 5), enemy)
            && !self.is_square_attacked(Square(back, 6), enemy)
        {
            moves.push(Move::castle(from, Square(back, 6)));
        }

        if self.castling.has(side, false)
            && self.is_empty(Square(back, 1))
            && self.is_empty(Square(back, 2))
            && self.is_empty(Square(back, 3))
            && !self.is_square_attacked(Square(back, 4), enemy)
            && !self.is_square_attacked(Square(back, 3), enemy)
            && !self.is_square_attacked(Square(back, 2), enemy)
        {
            moves.push(Move::castle(from, Square(back, 2)));
        }
    }
}
