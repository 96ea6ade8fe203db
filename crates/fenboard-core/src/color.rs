//! Piece color representation.

/// The two piece colors.
///
/// Uppercase FEN letters denote white pieces, lowercase letters black ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, white first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// The prefix letter this color contributes to a theme key, `'w'` or
    /// `'b'`.
    #[inline]
    pub const fn key_prefix(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}
