//! The parsed 8x8 position grid.

use crate::{Color, Piece};

/// An 8x8 chess position as parsed from the FEN board field.
///
/// Rows are stored top to bottom: row 0 is rank 8 and column 0 is file a,
/// so the top-left cell is the a8 square. Empty squares hold `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    pub(crate) cells: [[Option<(Piece, Color)>; 8]; 8],
}

impl Board {
    /// Board edge length in squares.
    pub const SIZE: usize = 8;

    /// Returns the piece on the given cell, if any.
    ///
    /// Indexing follows the stored orientation: `piece_at(0, 0)` is a8 and
    /// `piece_at(7, 7)` is h1. Panics if `row` or `col` is 8 or larger.
    #[must_use]
    pub fn piece_at(&self, row: usize, col: usize) -> Option<(Piece, Color)> {
        self.cells[row][col]
    }

    /// Returns the number of pieces on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    /// Iterates over occupied cells as `(row, col, piece, color)` in
    /// top-to-bottom, left-to-right order.
    pub fn pieces(&self) -> impl Iterator<Item = (usize, usize, Piece, Color)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.map(|(piece, color)| (row, col, piece, color)))
        })
    }
}
