use super::super::attacks::KNIGHT_OFFSETS;
use super::super::types::{Color, Move, MoveList, PieceKind, Square};
use super::super::Board;

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, side: Color, moves: &mut MoveList) {
        for &(dr, df) in &KNIGHT_OFFSETS {
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
    }
}
