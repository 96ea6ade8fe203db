//! Core types for chessboard rendering.
//!
//! This crate provides the logical half of the rendering pipeline:
//! - [`Piece`] and [`Color`] for piece representation
//! - [`Board`] for the parsed 8x8 position grid
//! - FEN board-field parsing and serialization

mod board;
mod color;
mod fen;
mod piece;

pub use board::Board;
pub use color::Color;
pub use fen::FenError;
pub use piece::Piece;
