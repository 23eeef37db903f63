use super::super::types::{Color, Move, MoveList, PieceKind, Square};
use super::super::Board;

impl Board {
    /// Pawn moves from `from`: single push (with promotion variants on the
    /// farthest rank), double push from the home rank, diagonal captures,
    /// capture-promotions, and en-passant capture.
    pub(crate) fn generate_pawn_moves(&self, from: Square, side: Color, moves: &mut MoveList) {
        let dir = side.pawn_direction();
        let promotion_rank = side.pawn_promotion_rank();

        if let Some(to) = from.offset(dir, 0) {
            if self.is_empty(to) {
                if to.rank() == promotion_rank {
                    for kind in PieceKind::promotions(side) {
                        moves.push(Move::promotion(from, to, kind, false));
                    }
                } else {
                    moves.push(Move::quiet(from, to));
                    if from.rank() == side.pawn_start_rank() {
                        if let Some(two) = from.offset(2 * dir, 0) {
                            if self.is_empty(two) {
                                moves.push(Move::double_push(from, two));
                            }
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(to) = from.offset(dir, df) else {
                continue;
            };
            let target = self.piece_at(to);
            if target.is_enemy_of(side) {
                if to.rank() == promotion_rank {
                    for kind in PieceKind::promotions(side) {
                        moves.push(Move::promotion(from, to, kind, true));
                    }
                } else {
                    moves.push(Move::capture(from, to));
                }
            } else if self.en_passant == Some(to) {
                moves.push(Move::en_passant(from, to));
            }
        }
    }
}
