//! Chess piece representation.

use crate::Color;

/// The six piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl Piece {
    /// All piece kinds, in descending value order.
    pub const ALL: [Piece; 6] = [
        Piece::King,
        Piece::Queen,
        Piece::Rook,
        Piece::Bishop,
        Piece::Knight,
        Piece::Pawn,
    ];

    /// The lowercase FEN letter for this piece kind.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            Piece::King => 'k',
            Piece::Queen => 'q',
            Piece::Rook => 'r',
            Piece::Bishop => 'b',
            Piece::Knight => 'n',
            Piece::Pawn => 'p',
        }
    }

    /// Returns the FEN character for this piece with the given color,
    /// uppercase for white.
    pub const fn to_fen_char(self, color: Color) -> char {
        match color {
            Color::White => self.letter().to_ascii_uppercase(),
            Color::Black => self.letter(),
        }
    }

    /// Parses one of the twelve FEN piece characters.
    pub const fn from_fen_char(c: char) -> Option<(Piece, Color)> {
        let piece = match c.to_ascii_lowercase() {
            'k' => Piece::King,
            'q' => Piece::Queen,
            'r' => Piece::Rook,
            'b' => Piece::Bishop,
            'n' => Piece::Knight,
            'p' => Piece::Pawn,
            _ => return None,
        };
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some((piece, color))
    }

    /// Returns the theme artwork key for this piece with the given color,
    /// `"wK"` through `"bP"`.
    pub const fn theme_key(self, color: Color) -> &'static str {
        match (color, self) {
            (Color::White, Piece::King) => "wK",
            (Color::White, Piece::Queen) => "wQ",
            (Color::White, Piece::Rook) => "wR",
            (Color::White, Piece::Bishop) => "wB",
            (Color::White, Piece::Knight) => "wN",
            (Color::White, Piece::Pawn) => "wP",
            (Color::Black, Piece::King) => "bK",
            (Color::Black, Piece::Queen) => "bQ",
            (Color::Black, Piece::Rook) => "bR",
            (Color::Black, Piece::Bishop) => "bB",
            (Color::Black, Piece::Knight) => "bN",
            (Color::Black, Piece::Pawn) => "bP",
        }
    }
}
