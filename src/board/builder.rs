//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN
//! strings; used heavily by tests for hand-crafted mate and stalemate
//! positions.
//!
//! # Example
//! ```
//! use gambit::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(7, 4), PieceKind::WhiteKing)
//!     .piece(Square(0, 4), PieceKind::BlackKing)
//!     .piece(Square(6, 0), PieceKind::WhitePawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! ```

use super::error::PositionError;
use super::types::{CastlingRights, Color, PieceKind, Square};
use super::Board;

/// A fluent builder for `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, PieceKind)>,
    side_to_move: Option<Color>,
    castling: CastlingRights,
    en_passant: Option<Square>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: None,
            castling: CastlingRights::none(),
            en_passant: None,
        }
    }

    /// Place a piece, replacing whatever was on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, kind: PieceKind) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, kind));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Set the side to move (defaults to White).
    #[must_use]
    pub fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = Some(color);
        self
    }

    /// Set castling rights wholesale.
    #[must_use]
    pub fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling = rights;
        self
    }

    /// Enable kingside castling for a color.
    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.castling.set(color, true);
        self
    }

    /// Enable queenside castling for a color.
    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.castling.set(color, false);
        self
    }

    /// Set the en-passant target square.
    #[must_use]
    pub fn en_passant(mut self, square: Square) -> Self {
        self.en_passant = Some(square);
        self
    }

    /// Build the board, running the same fail-fast validation as the FEN
    /// loader.
    pub fn build(self) -> Result<Board, PositionError> {
        let mut board = Board::empty();
        for (square, kind) in self.pieces {
            board.set_piece(square, kind);
        }
        board.side_to_move = self.side_to_move.unwrap_or(Color::White);
        board.castling = self.castling;
        board.en_passant = self.en_passant;
        board.validate()?;
        Ok(board)
    }
}
