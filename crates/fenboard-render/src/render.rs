//! Board image composition.

use std::io::Cursor;
use std::path::Path;

use fenboard_core::{Board, FenError};
use fenboard_themes::Theme;
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use thiserror::Error;

use crate::art;
use crate::options::{Perspective, RenderOptions};

/// Errors that can occur while rendering a board image.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A render option is outside the supported range.
    #[error("invalid render option: {0}")]
    InvalidOption(String),

    /// A board color was not a recognizable hex string.
    #[error("invalid board color '{0}', expected #RGB or #RRGGBB")]
    InvalidColor(String),

    /// Piece artwork was not valid base64.
    #[error("artwork for '{key}' is not valid base64: {source}")]
    ArtworkBase64 {
        key: String,
        source: base64::DecodeError,
    },

    /// Piece artwork bytes were not a decodable image.
    #[error("artwork for '{key}' could not be decoded: {source}")]
    ArtworkDecode {
        key: String,
        source: image::ImageError,
    },

    /// A piece key is present in the theme but maps to an empty artwork list.
    #[error("artwork list for '{key}' is empty")]
    ArtworkEmpty { key: String },

    /// The composed image could not be encoded or written.
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    /// The FEN string did not describe a valid board.
    #[error(transparent)]
    Fen(#[from] FenError),
}

/// Renders a parsed board into an RGBA image.
///
/// The canvas starts out white, squares are tiled top-left to bottom-right
/// with the theme's light color on `(row + col)`-even cells, and piece
/// artwork is resized to the square size and composited per occupied cell.
/// For [`Perspective::Black`] the finished canvas is rotated 180 degrees.
///
/// Squares are `size / 8` pixels, so sizes that are not multiples of 8
/// leave a white strip along the right and bottom edges. Cells whose piece
/// key has no artwork in the theme are left as bare squares; that is a
/// success, not an error.
pub fn render_board(
    board: &Board,
    theme: &Theme,
    options: &RenderOptions,
) -> Result<RgbaImage, RenderError> {
    if options.size == 0 {
        return Err(RenderError::InvalidOption(
            "size must be positive".to_string(),
        ));
    }

    let light = art::parse_hex_color(theme.board.light())?;
    let dark = art::parse_hex_color(theme.board.dark())?;

    let mut canvas = RgbaImage::from_pixel(options.size, options.size, Rgba([255, 255, 255, 255]));
    let square = options.size / 8;

    if square > 0 {
        for row in 0..Board::SIZE {
            for col in 0..Board::SIZE {
                let color = if (row + col) % 2 == 0 { light } else { dark };
                let rect = Rect::at((col as u32 * square) as i32, (row as u32 * square) as i32)
                    .of_size(square, square);
                draw_filled_rect_mut(&mut canvas, rect, color);
            }
        }

        for (row, col, piece, piece_color) in board.pieces() {
            let key = piece.theme_key(piece_color);
            let artwork = match theme.artwork(key) {
                Some(artwork) => artwork,
                None => continue,
            };
            let payload = artwork.first().ok_or_else(|| RenderError::ArtworkEmpty {
                key: key.to_string(),
            })?;

            let decoded = art::decode_artwork(key, payload)?;
            let sprite = decoded.resize_exact(square, square, FilterType::Lanczos3);
            let x = i64::from(col as u32 * square);
            let y = i64::from(row as u32 * square);
            if sprite.color().has_alpha() {
                imageops::overlay(&mut canvas, &sprite.to_rgba8(), x, y);
            } else {
                imageops::replace(&mut canvas, &sprite.to_rgba8(), x, y);
            }
        }
    }

    if options.perspective == Perspective::Black {
        canvas = imageops::rotate180(&canvas);
    }

    Ok(canvas)
}

/// Parses a FEN string and renders it.
///
/// Only the board field of the FEN is consumed; see [`Board::from_fen`].
pub fn render_fen(
    fen: &str,
    theme: &Theme,
    options: &RenderOptions,
) -> Result<RgbaImage, RenderError> {
    let board = Board::from_fen(fen)?;
    render_board(&board, theme, options)
}

/// Renders a FEN string into encoded PNG bytes.
///
/// The canvas is flattened to RGB before encoding.
pub fn render_fen_to_png(
    fen: &str,
    theme: &Theme,
    options: &RenderOptions,
) -> Result<Vec<u8>, RenderError> {
    let canvas = render_fen(fen, theme, options)?;
    let rgb = DynamicImage::ImageRgba8(canvas).to_rgb8();

    let mut bytes = Vec::new();
    rgb.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Renders a FEN string and writes it to `path` as a PNG file.
///
/// The output is PNG-encoded regardless of the path's extension.
pub fn render_fen_to_file(
    fen: &str,
    theme: &Theme,
    options: &RenderOptions,
    path: impl AsRef<Path>,
) -> Result<(), RenderError> {
    let canvas = render_fen(fen, theme, options)?;
    let rgb = DynamicImage::ImageRgba8(canvas).to_rgb8();
    rgb.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use fenboard_themes::BoardColors;

    use super::*;

    fn bare_theme() -> Theme {
        Theme::new(BoardColors::new("#ffffff", "#000000"))
    }

    #[test]
    fn zero_size_is_rejected() {
        let board = Board::default();
        let err = render_board(&board, &bare_theme(), &RenderOptions::with_size(0)).unwrap_err();
        assert!(matches!(err, RenderError::InvalidOption(_)));
    }

    #[test]
    fn malformed_board_color_is_rejected() {
        let board = Board::default();
        let theme = Theme::new(BoardColors::new("white", "#000000"));
        let err = render_board(&board, &theme, &RenderOptions::default()).unwrap_err();
        assert!(matches!(err, RenderError::InvalidColor(c) if c == "white"));
    }

    #[test]
    fn empty_artwork_list_is_an_error() {
        let board = Board::from_fen("8/8/8/8/8/8/8/4K3").unwrap();
        let mut theme = bare_theme();
        theme.pieces.insert("wK".to_string(), Vec::new());

        let err = render_board(&board, &theme, &RenderOptions::with_size(80)).unwrap_err();
        assert!(matches!(err, RenderError::ArtworkEmpty { key } if key == "wK"));
    }

    #[test]
    fn missing_artwork_is_skipped() {
        let board = Board::default();
        let canvas = render_board(&board, &bare_theme(), &RenderOptions::with_size(80)).unwrap();
        assert_eq!(canvas.dimensions(), (80, 80));
    }

    #[test]
    fn sizes_below_eight_produce_blank_canvases() {
        let board = Board::default();
        let canvas = render_board(&board, &bare_theme(), &RenderOptions::with_size(5)).unwrap();
        assert_eq!(canvas.dimensions(), (5, 5));
        for pixel in canvas.pixels() {
            assert_eq!(*pixel, Rgba([255, 255, 255, 255]));
        }
    }

    #[test]
    fn invalid_fen_is_reported() {
        let err = render_fen(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP",
            &bare_theme(),
            &RenderOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, RenderError::Fen(FenError::WrongRowCount(7))));
    }
}
