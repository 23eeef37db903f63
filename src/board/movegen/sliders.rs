use super::super::types::{Color, Move, MoveList, PieceKind, Square};
use super::super::Board;

impl Board {
    /// Ray moves for bishops, rooks, and queens.
    ///
    /// Each empty square along a ray yields a quiet move and the walk
    /// continues; the first occupied square yields a capture if enemy and
    /// stops the walk either way.
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Square,
        side: Color,
        directions: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        for &(dr, df) in directions {
            let mut current = from;
            while let Some(to) = current.offset(dr, df) {
                let target = self.piece_at(to);
                if target == PieceKind::Empty {
                    moves.push(Move::quiet(from, to));
                    current = to;
                    continue;
                }
                if target.is_enemy_of(side) {
                    moves.push(Move::capture(from, to));
                }
                break;
            }
        }
    }
}
