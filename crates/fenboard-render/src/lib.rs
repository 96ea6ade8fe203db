//! Raster rendering of chess positions.
//!
//! This crate composes a parsed [`fenboard_core::Board`] with a
//! [`fenboard_themes::Theme`] into a pixel image: square colors tiled
//! 8x8, piece artwork decoded, resized and composited per occupied cell,
//! and an optional 180-degree rotation for the black player's viewpoint.

mod art;
mod options;
mod render;

pub use options::{Perspective, RenderOptions};
pub use render::{
    render_board, render_fen, render_fen_to_file, render_fen_to_png, RenderError,
};
