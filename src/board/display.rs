//! Human-readable board rendering.
//!
//! External presentation only; nothing in the engine depends on these.

use std::fmt;
use std::fmt::Write as _;

use super::types::{Color, Square};
use super::Board;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in 0..8 {
            write!(f, "{}  ", 8 - rank)?;
            for file in 0..8 {
                write!(f, "{} ", self.piece_at(Square(rank, file)).to_unicode())?;
            }
            writeln!(f)?;
        }
        writeln!(f, "\n   a b c d e f g h\n")?;

        writeln!(f, "Side to move: {}", self.side_to_move)?;

        let mut castling = String::new();
        for (color, kingside, c) in [
            (Color::White, true, 'K'),
            (Color::White, false, 'Q'),
            (Color::Black, true, 'k'),
            (Color::Black, false, 'q'),
        ] {
            if self.castling.has(color, kingside) {
                castling.push(c);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }
        writeln!(f, "Castling rights: {castling}")?;

        match self.en_passant {
            Some(square) => writeln!(f, "En passant square: {square}"),
            None => writeln!(f, "En passant square: -"),
        }
    }
}

impl Board {
    /// Render the squares attacked by `by` as an `x`/`.` grid.
    ///
    /// Debugging and test aid for the attack oracle.
    #[must_use]
    pub fn attack_grid(&self, by: Color) -> String {
        let mut out = String::new();
        for rank in 0..8 {
            let _ = write!(out, "{}  ", 8 - rank);
            for file in 0..8 {
                let mark = if self.is_square_attacked(Square(rank, file), by) {
                    'x'
                } else {
                    '.'
                };
                let _ = write!(out, "{mark} ");
            }
            out.push('\n');
        }
        out.push_str("\n   a b c d e f g h\n");
        out
    }
}
