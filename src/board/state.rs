//! Mutable board state.
//!
//! A `Board` is a plain value: an 8x8 grid of [`PieceKind`] plus side to
//! move, castling rights, the en-passant target, and the two tracked king
//! squares. Search snapshots it with `clone()` and restores it with
//! `clone_from()`; nothing in the engine patches state back incrementally.

use super::error::PositionError;
use super::types::{CastlingRights, Color, PieceKind, Square};

/// Full game state for one position.
///
/// The tracked king squares are redundant with the grid and exist for O(1)
/// check lookup; [`Board::apply_move`](crate::board::Board::apply_move)
/// keeps them in sync, and every construction path re-derives them through
/// [`Board::validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) grid: [[PieceKind; 8]; 8],
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) kings: [Square; 2],
}

impl Board {
    /// Standard starting position.
    #[must_use]
    pub fn new() -> Self {
        use PieceKind::{
            BlackBishop, BlackKing, BlackKnight, BlackPawn, BlackQueen, BlackRook, Empty,
            WhiteBishop, WhiteKing, WhiteKnight, WhitePawn, WhiteQueen, WhiteRook,
        };

        let grid = [
            [
                BlackRook,
                BlackKnight,
                BlackBishop,
                BlackQueen,
                BlackKing,
                BlackBishop,
                BlackKnight,
                BlackRook,
            ],
            [BlackPawn; 8],
            [Empty; 8],
            [Empty; 8],
            [Empty; 8],
            [Empty; 8],
            [WhitePawn; 8],
            [
                WhiteRook,
                WhiteKnight,
                WhiteBishop,
                WhiteQueen,
                WhiteKing,
                WhiteBishop,
                WhiteKnight,
                WhiteRook,
            ],
        ];

        Board {
            grid,
            side_to_move: Color::White,
            castling: CastlingRights::all(),
            en_passant: None,
            kings: [Square(7, 4), Square(0, 4)],
        }
    }

    /// Empty board used by the builder and the FEN parser. Not a valid
    /// position until pieces are placed and [`Board::validate`] has run.
    pub(crate) fn empty() -> Self {
        Board {
            grid: [[PieceKind::Empty; 8]; 8],
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant: None,
            kings: [Square(7, 4), Square(0, 4)],
        }
    }

    /// The piece (or `Empty`) on a square.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> PieceKind {
        self.grid[square.0][square.1]
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, square: Square, kind: PieceKind) {
        self.grid[square.0][square.1] = kind;
    }

    #[inline]
    pub(crate) fn clear_square(&mut self, square: Square) {
        self.grid[square.0][square.1] = PieceKind::Empty;
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square) == PieceKind::Empty
    }

    /// The side whose turn it is.
    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Hand the move to the opponent.
    ///
    /// Deliberately not part of move application: the search owns turn
    /// sequencing, application owns state mutation.
    #[inline]
    pub fn toggle_side_to_move(&mut self) {
        self.side_to_move = self.side_to_move.opponent();
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// The square a pawn just passed over, if the last move was a double
    /// push. Valid for exactly one ply.
    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    /// Tracked location of a side's king.
    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.kings[color.index()]
    }

    /// Locate a side's king by scanning the grid.
    pub(crate) fn find_king(&self, color: Color) -> Option<Square> {
        let king = PieceKind::king(color);
        for rank in 0..8 {
            for file in 0..8 {
                if self.grid[rank][file] == king {
                    return Some(Square(rank, file));
                }
            }
        }
        None
    }

    /// Fail-fast validation run on every construction path.
    ///
    /// Rejects positions the engine's invariants cannot hold for: missing
    /// or duplicated kings, castling rights without the matching king and
    /// rook placement, and en-passant targets off the double-push ranks.
    /// Re-derives the tracked king squares from the grid as a side effect.
    pub(crate) fn validate(&mut self) -> Result<(), PositionError> {
        for color in Color::BOTH {
            let king = PieceKind::king(color);
            let mut found = None;
            for rank in 0..8 {
                for file in 0..8 {
                    if self.grid[rank][file] == king {
                        if found.is_some() {
                            return Err(PositionError::DuplicateKing { color });
                        }
                        found = Some(Square(rank, file));
                    }
                }
            }
            match found {
                Some(square) => self.kings[color.index()] = square,
                None => return Err(PositionError::MissingKing { color }),
            }
        }

        for color in Color::BOTH {
            let back = color.back_rank();
            for kingside in [true, false] {
                if !self.castling.has(color, kingside) {
                    continue;
                }
                let rook_file = if kingside { 7 } else { 0 };
                let placed = self.kings[color.index()] == Square(back, 4)
                    && self.piece_at(Square(back, rook_file)) == PieceKind::rook(color);
                if !placed {
                    return Err(PositionError::InconsistentCastling { color, kingside });
                }
            }
        }

        if let Some(square) = self.en_passant {
            let expected_rank = match self.side_to_move {
                Color::White => 2,
                Color::Black => 5,
            };
            if square.rank() != expected_rank {
                return Err(PositionError::BadEnPassantTarget { square });
            }
        }

        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
