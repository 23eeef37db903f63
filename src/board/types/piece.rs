//! Piece kinds and colors.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything a board cell can hold, plus the off-board sentinel used in
/// lookup tables.
///
/// The numeric order matters: all white kinds occupy the contiguous range
/// 2..=7 and all black kinds 8..=13, so "is this an enemy piece" is a single
/// range comparison on the code rather than a per-kind check.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum PieceKind {
    Offboard = 0,
    Empty = 1,
    WhitePawn = 2,
    WhiteBishop = 3,
    WhiteKnight = 4,
    WhiteRook = 5,
    WhiteQueen = 6,
    WhiteKing = 7,
    BlackPawn = 8,
    BlackBishop = 9,
    BlackKnight = 10,
    BlackRook = 11,
    BlackQueen = 12,
    BlackKing = 13,
}

const WHITE_MIN: u8 = PieceKind::WhitePawn as u8;
const WHITE_MAX: u8 = PieceKind::WhiteKing as u8;
const BLACK_MIN: u8 = PieceKind::BlackPawn as u8;
const BLACK_MAX: u8 = PieceKind::BlackKing as u8;

impl PieceKind {
    /// All kinds in code order, sentinels included.
    pub const ALL: [PieceKind; 14] = [
        PieceKind::Offboard,
        PieceKind::Empty,
        PieceKind::WhitePawn,
        PieceKind::WhiteBishop,
        PieceKind::WhiteKnight,
        PieceKind::WhiteRook,
        PieceKind::WhiteQueen,
        PieceKind::WhiteKing,
        PieceKind::BlackPawn,
        PieceKind::BlackBishop,
        PieceKind::BlackKnight,
        PieceKind::BlackRook,
        PieceKind::BlackQueen,
        PieceKind::BlackKing,
    ];

    /// Numeric code as packed into move encodings and lookup tables.
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Inverse of [`PieceKind::code`].
    #[must_use]
    pub const fn from_code(code: u8) -> Option<PieceKind> {
        if (code as usize) < PieceKind::ALL.len() {
            Some(PieceKind::ALL[code as usize])
        } else {
            None
        }
    }

    /// Returns true for the twelve colored kinds, false for both sentinels.
    #[inline]
    #[must_use]
    pub const fn is_piece(self) -> bool {
        self.code() >= WHITE_MIN
    }

    /// The owning color, if this is an actual piece.
    #[inline]
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        let code = self.code();
        if code >= BLACK_MIN {
            Some(Color::Black)
        } else if code >= WHITE_MIN {
            Some(Color::White)
        } else {
            None
        }
    }

    /// Single range comparison against one color's contiguous code block.
    #[inline]
    #[must_use]
    pub const fn belongs_to(self, color: Color) -> bool {
        let code = self.code();
        match color {
            Color::White => WHITE_MIN <= code && code <= WHITE_MAX,
            Color::Black => BLACK_MIN <= code && code <= BLACK_MAX,
        }
    }

    /// True if this is a piece of the color opposing `color`.
    #[inline]
    #[must_use]
    pub const fn is_enemy_of(self, color: Color) -> bool {
        self.belongs_to(color.opponent())
    }

    #[inline]
    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self, PieceKind::WhiteKing | PieceKind::BlackKing)
    }

    #[inline]
    #[must_use]
    pub const fn pawn(color: Color) -> PieceKind {
        match color {
            Color::White => PieceKind::WhitePawn,
            Color::Black => PieceKind::BlackPawn,
        }
    }

    #[inline]
    #[must_use]
    pub const fn bishop(color: Color) -> PieceKind {
        match color {
            Color::White => PieceKind::WhiteBishop,
            Color::Black => PieceKind::BlackBishop,
        }
    }

    #[inline]
    #[must_use]
    pub const fn knight(color: Color) -> PieceKind {
        match color {
            Color::White => PieceKind::WhiteKnight,
            Color::Black => PieceKind::BlackKnight,
        }
    }

    #[inline]
    #[must_use]
    pub const fn rook(color: Color) -> PieceKind {
        match color {
            Color::White => PieceKind::WhiteRook,
            Color::Black => PieceKind::BlackRook,
        }
    }

    #[inline]
    #[must_use]
    pub const fn queen(color: Color) -> PieceKind {
        match color {
            Color::White => PieceKind::WhiteQueen,
            Color::Black => PieceKind::BlackQueen,
        }
    }

    #[inline]
    #[must_use]
    pub const fn king(color: Color) -> PieceKind {
        match color {
            Color::White => PieceKind::WhiteKing,
            Color::Black => PieceKind::BlackKing,
        }
    }

    /// Promotion choices in generation order (queen first).
    #[must_use]
    pub const fn promotions(color: Color) -> [PieceKind; 4] {
        [
            PieceKind::queen(color),
            PieceKind::rook(color),
            PieceKind::bishop(color),
            PieceKind::knight(color),
        ]
    }

    /// Standard material value in centipawns, unsigned.
    ///
    /// Pawn=100, Knight=320, Bishop=330, Rook=500, Queen=900,
    /// King=20000 (effectively infinite). Sentinels are worth nothing.
    #[inline]
    #[must_use]
    pub const fn material_value(self) -> i32 {
        match self {
            PieceKind::WhitePawn | PieceKind::BlackPawn => 100,
            PieceKind::WhiteKnight | PieceKind::BlackKnight => 320,
            PieceKind::WhiteBishop | PieceKind::BlackBishop => 330,
            PieceKind::WhiteRook | PieceKind::BlackRook => 500,
            PieceKind::WhiteQueen | PieceKind::BlackQueen => 900,
            PieceKind::WhiteKing | PieceKind::BlackKing => 20000,
            PieceKind::Offboard | PieceKind::Empty => 0,
        }
    }

    /// Parse a FEN piece character (uppercase white, lowercase black).
    #[must_use]
    pub const fn from_char(c: char) -> Option<PieceKind> {
        match c {
            'P' => Some(PieceKind::WhitePawn),
            'B' => Some(PieceKind::WhiteBishop),
            'N' => Some(PieceKind::WhiteKnight),
            'R' => Some(PieceKind::WhiteRook),
            'Q' => Some(PieceKind::WhiteQueen),
            'K' => Some(PieceKind::WhiteKing),
            'p' => Some(PieceKind::BlackPawn),
            'b' => Some(PieceKind::BlackBishop),
            'n' => Some(PieceKind::BlackKnight),
            'r' => Some(PieceKind::BlackRook),
            'q' => Some(PieceKind::BlackQueen),
            'k' => Some(PieceKind::BlackKing),
            _ => None,
        }
    }

    /// ASCII rendering, FEN-compatible for actual pieces.
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Offboard => 'o',
            PieceKind::Empty => '.',
            PieceKind::WhitePawn => 'P',
            PieceKind::WhiteBishop => 'B',
            PieceKind::WhiteKnight => 'N',
            PieceKind::WhiteRook => 'R',
            PieceKind::WhiteQueen => 'Q',
            PieceKind::WhiteKing => 'K',
            PieceKind::BlackPawn => 'p',
            PieceKind::BlackBishop => 'b',
            PieceKind::BlackKnight => 'n',
            PieceKind::BlackRook => 'r',
            PieceKind::BlackQueen => 'q',
            PieceKind::BlackKing => 'k',
        }
    }

    /// Unicode chess glyph used by the board renderer.
    #[inline]
    #[must_use]
    pub const fn to_unicode(self) -> &'static str {
        match self {
            PieceKind::Offboard => "o",
            PieceKind::Empty => ".",
            PieceKind::WhitePawn => "\u{2659}",
            PieceKind::WhiteBishop => "\u{2657}",
            PieceKind::WhiteKnight => "\u{2658}",
            PieceKind::WhiteRook => "\u{2656}",
            PieceKind::WhiteQueen => "\u{2655}",
            PieceKind::WhiteKing => "\u{2654}",
            PieceKind::BlackPawn => "\u{265F}",
            PieceKind::BlackBishop => "\u{265D}",
            PieceKind::BlackKnight => "\u{265E}",
            PieceKind::BlackRook => "\u{265C}",
            PieceKind::BlackQueen => "\u{265B}",
            PieceKind::BlackKing => "\u{265A}",
        }
    }
}

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Scoring sign for evaluation (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Back rank for this color. Rank 0 is the top of the board (Black's
    /// home), rank 7 the bottom (White's home).
    #[inline]
    #[must_use]
    pub(crate) const fn back_rank(self) -> usize {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Pawn forward direction in rank indices (-1 for White, +1 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_direction(self) -> isize {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Pawn starting rank (6 for White, 1 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_start_rank(self) -> usize {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Pawn promotion rank (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_promotion_rank(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}
