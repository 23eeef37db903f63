//! Static position evaluation: material plus piece-square bonuses.
//!
//! One phase-independent table set for the whole game; no mobility, king
//! safety, or endgame heuristics.

use super::types::{Color, PieceKind, Square};
use super::Board;

// Piece-square tables in centipawns, indexed [rank][file] in board
// orientation (rank 0 = rank 8 at the top). Values are from White's point
// of view; Black mirrors the rank index. Tables need not be left-right
// symmetric, only the vertical mirror matters for color symmetry.

const PAWN_PST: [[i32; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [5, 5, 10, 25, 25, 10, 5, 5],
    [0, 0, 0, 20, 20, 0, 0, 0],
    [5, -5, -10, 0, 0, -10, -5, 5],
    [5, 10, 10, -20, -20, 10, 10, 5],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const KNIGHT_PST: [[i32; 8]; 8] = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20, 0, 0, 0, 0, -20, -40],
    [-30, 0, 10, 15, 15, 10, 0, -30],
    [-30, 5, 15, 20, 20, 15, 5, -30],
    [-30, 0, 15, 20, 20, 15, 0, -30],
    [-30, 5, 10, 15, 15, 10, 5, -30],
    [-40, -20, 0, 5, 5, 0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

const BISHOP_PST: [[i32; 8]; 8] = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 10, 10, 5, 0, -10],
    [-10, 5, 5, 10, 10, 5, 5, -10],
    [-10, 0, 10, 10, 10, 10, 0, -10],
    [-10, 10, 10, 10, 10, 10, 10, -10],
    [-10, 5, 0, 0, 0, 0, 5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

const ROOK_PST: [[i32; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [5, 10, 10, 10, 10, 10, 10, 5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [0, 0, 0, 5, 5, 0, 0, 0],
];

const QUEEN_PST: [[i32; 8]; 8] = [
    [-20, -10, -10, -5, -5, -10, -10, -20],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-10, 0, 5, 5, 5, 5, 0, -10],
    [-5, 0, 5, 5, 5, 5, 0, -5],
    [0, 0, 5, 5, 5, 5, 0, -5],
    [-10, 5, 5, 5, 5, 5, 0, -10],
    [-10, 0, 5, 0, 0, 0, 0, -10],
    [-20, -10, -10, -5, -5, -10, -10, -20],
];

const KING_PST: [[i32; 8]; 8] = [
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [20, 20, 0, 0, 0, 0, 20, 20],
    [20, 30, 10, 0, 0, 10, 30, 20],
];

fn pst_for(kind: PieceKind) -> &'static [[i32; 8]; 8] {
    match kind {
        PieceKind::WhitePawn | PieceKind::BlackPawn => &PAWN_PST,
        PieceKind::WhiteKnight | PieceKind::BlackKnight => &KNIGHT_PST,
        PieceKind::WhiteBishop | PieceKind::BlackBishop => &BISHOP_PST,
        PieceKind::WhiteRook | PieceKind::BlackRook => &ROOK_PST,
        PieceKind::WhiteQueen | PieceKind::BlackQueen => &QUEEN_PST,
        _ => &KING_PST,
    }
}

impl Board {
    /// Static evaluation in centipawns, positive for White.
    ///
    /// Sums a fixed material value and a mirrored piece-square bonus over
    /// every occupied square. The starting position scores exactly 0.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        let mut score = 0;
        for rank in 0..8 {
            for file in 0..8 {
                let kind = self.piece_at(Square(rank, file));
                let Some(color) = kind.color() else {
                    continue;
                };
                let table = pst_for(kind);
                let bonus = match color {
                    Color::White => table[rank][file],
                    Color::Black => table[7 - rank][file],
                };
                score += color.sign() * (kind.material_value() + bonus);
            }
        }
        score
    }
}
