//! FEN (Forsyth-Edwards Notation) board-field parsing and serialization.

use thiserror::Error;

use crate::{Board, Piece};

/// Errors that can occur when parsing the board field of a FEN string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 8 rows, got {0}")]
    WrongRowCount(usize),

    #[error("invalid FEN: empty-square run '{0}' is out of range, expected 1-8")]
    InvalidRunLength(char),

    #[error("invalid FEN: unrecognized symbol '{0}'")]
    UnrecognizedSymbol(char),

    #[error("invalid FEN: rank {rank} has {len} squares, expected 8")]
    RowLengthMismatch { rank: usize, len: usize },
}

impl Board {
    /// The standard starting position FEN.
    pub const STARTPOS: &'static str =
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Parses the board field of a FEN string.
    ///
    /// Only the first whitespace-delimited field is read; side to move,
    /// castling rights, en passant square and move counters may follow but
    /// are ignored. A bare board field such as `"8/8/8/8/8/8/8/8"` is
    /// accepted as well.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let field = fen.split_whitespace().next().unwrap_or("");
        let rows: Vec<&str> = field.split('/').collect();

        if rows.len() != 8 {
            return Err(FenError::WrongRowCount(rows.len()));
        }

        let mut cells = [[None; 8]; 8];
        for (row, part) in rows.iter().enumerate() {
            let mut col = 0usize;
            for c in part.chars() {
                if let Some(run) = c.to_digit(10) {
                    if !(1..=8).contains(&run) {
                        return Err(FenError::InvalidRunLength(c));
                    }
                    col += run as usize;
                } else if let Some((piece, color)) = Piece::from_fen_char(c) {
                    if col < 8 {
                        cells[row][col] = Some((piece, color));
                    }
                    col += 1;
                } else {
                    return Err(FenError::UnrecognizedSymbol(c));
                }
            }
            if col != 8 {
                return Err(FenError::RowLengthMismatch {
                    rank: 8 - row,
                    len: col,
                });
            }
        }

        Ok(Board { cells })
    }

    /// Serializes the board back to a canonical FEN board field.
    ///
    /// Empty runs are emitted as maximal digits, so a board parsed from a
    /// field like `"44/8/..."` serializes back as `"8/8/..."`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut out = String::new();
        for row in 0..Self::SIZE {
            if row > 0 {
                out.push('/');
            }
            let mut empty = 0u8;
            for col in 0..Self::SIZE {
                match self.cells[row][col] {
                    None => empty += 1,
                    Some((piece, color)) => {
                        if empty > 0 {
                            out.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        out.push(piece.to_fen_char(color));
                    }
                }
            }
            if empty > 0 {
                out.push(char::from(b'0' + empty));
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::from_fen(Self::STARTPOS).expect("STARTPOS is valid")
    }
}
