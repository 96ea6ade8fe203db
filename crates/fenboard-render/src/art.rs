//! Hex color and artwork payload decoding.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{DynamicImage, Rgba};

use crate::render::RenderError;

/// Parses a `#RGB` or `#RRGGBB` hex color into an opaque pixel.
pub(crate) fn parse_hex_color(color: &str) -> Result<Rgba<u8>, RenderError> {
    let invalid = || RenderError::InvalidColor(color.to_string());

    let hex = color.strip_prefix('#').ok_or_else(invalid)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;

    let [r, g, b] = match hex.len() {
        3 => [
            (((value >> 8) & 0xf) * 17) as u8,
            (((value >> 4) & 0xf) * 17) as u8,
            ((value & 0xf) * 17) as u8,
        ],
        6 => [(value >> 16) as u8, (value >> 8) as u8, value as u8],
        _ => return Err(invalid()),
    };
    Ok(Rgba([r, g, b, 255]))
}

/// Decodes a base64 artwork payload into an image.
///
/// Payloads may carry a `data:image/...;base64,` prefix, which some theme
/// files use; everything before the first comma is dropped in that case.
/// Whitespace inside the payload is ignored.
pub(crate) fn decode_artwork(key: &str, payload: &str) -> Result<DynamicImage, RenderError> {
    let data = match payload.strip_prefix("data:image") {
        Some(rest) => rest.split_once(',').map_or(payload, |(_, data)| data),
        None => payload,
    };
    let data: String = data.split_whitespace().collect();

    let bytes = STANDARD
        .decode(data)
        .map_err(|source| RenderError::ArtworkBase64 {
            key: key.to_string(),
            source,
        })?;
    image::load_from_memory(&bytes).map_err(|source| RenderError::ArtworkDecode {
        key: key.to_string(),
        source,
    })
}
