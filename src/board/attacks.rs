//! Attack oracle: is a square attacked by a given side?
//!
//! Pure queries over the grid. Used for check detection after move
//! application and for castling-transit filters during generation.

use super::types::{Color, PieceKind, Square};
use super::Board;

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

impl Board {
    /// Is `square` attacked by any piece of `by`?
    ///
    /// Tests pawns, knights, and kings against their fixed offset tables,
    /// then walks the four diagonal and four orthogonal rays outward; the
    /// first occupied square on a ray decides it and stops the walk either
    /// way.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        // Pawns of `by` attack from one rank behind the target relative to
        // their own forward direction.
        let pawn = PieceKind::pawn(by);
        for df in [-1, 1] {
            if let Some(from) = square.offset(-by.pawn_direction(), df) {
                if self.piece_at(from) == pawn {
                    return true;
                }
            }
        }

        let knight = PieceKind::knight(by);
        for &(dr, df) in &KNIGHT_OFFSETS {
            if let Some(from) = square.offset(dr, df) {
                if self.piece_at(from) == knight {
                    return true;
                }
            }
        }

        let king = PieceKind::king(by);
        for &(dr, df) in &KING_OFFSETS {
            if let Some(from) = square.offset(dr, df) {
                if self.piece_at(from) == king {
                    return true;
                }
            }
        }

        let queen = PieceKind::queen(by);

        let bishop = PieceKind::bishop(by);
        for &(dr, df) in &BISHOP_DIRECTIONS {
            if self.ray_hits(square, dr, df, bishop, queen) {
                return true;
            }
        }

        let rook = PieceKind::rook(by);
        for &(dr, df) in &ROOK_DIRECTIONS {
            if self.ray_hits(square, dr, df, rook, queen) {
                return true;
            }
        }

        false
    }

    /// Walk one ray; true iff the first occupied square holds `slider` or
    /// `queen`.
    fn ray_hits(
        &self,
        from: Square,
        dr: isize,
        df: isize,
        slider: PieceKind,
        queen: PieceKind,
    ) -> bool {
        let mut current = from;
        while let Some(next) = current.offset(dr, df) {
            let kind = self.piece_at(next);
            if kind != PieceKind::Empty {
                return kind == slider || kind == queen;
            }
            current = next;
        }
        false
    }

    /// Is `color`'s king currently attacked? O(1) via the tracked king
    /// square.
    #[inline]
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_square(color), color.opponent())
    }
}
