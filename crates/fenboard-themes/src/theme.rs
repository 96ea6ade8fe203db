//! Core theme types and structures.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Light and dark square colors as hex strings.
///
/// Serialized as a two-element JSON array in `[light, dark]` order, which
/// is the shape theme files use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardColors(pub String, pub String);

impl BoardColors {
    /// Creates a color pair from light and dark hex strings.
    #[must_use]
    pub fn new(light: impl Into<String>, dark: impl Into<String>) -> Self {
        Self(light.into(), dark.into())
    }

    /// Returns the light-square color.
    #[must_use]
    pub fn light(&self) -> &str {
        &self.0
    }

    /// Returns the dark-square color.
    #[must_use]
    pub fn dark(&self) -> &str {
        &self.1
    }
}

/// A named visual style for rendering: square colors plus piece artwork.
///
/// Artwork is keyed by two-character piece keys (`"wK"` through `"bP"`)
/// and stored as base64-encoded raster data. Each key maps to a list of
/// payloads; only the first entry is consulted when rendering, further
/// entries are preserved but uninterpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Square colors in `[light, dark]` order.
    pub board: BoardColors,
    /// Piece key to artwork payloads (base64, optionally data-URL prefixed).
    pub pieces: HashMap<String, Vec<String>>,
}

impl Theme {
    /// Creates a theme with the given board colors and no artwork.
    #[must_use]
    pub fn new(board: BoardColors) -> Self {
        Self {
            board,
            pieces: HashMap::new(),
        }
    }

    /// Returns the artwork payload list for a piece key, if present.
    #[must_use]
    pub fn artwork(&self, key: &str) -> Option<&[String]> {
        self.pieces.get(key).map(|v| v.as_slice())
    }

    /// Returns the piece keys that have artwork, in sorted order.
    #[must_use]
    pub fn piece_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.pieces.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}

/// Introspection summary for a theme, as returned by
/// [`crate::ThemeCatalog::info`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeInfo {
    /// Theme name as listed in the catalog.
    pub name: String,
    /// Square colors in `[light, dark]` order.
    pub board_colors: BoardColors,
    /// Sorted piece keys that have artwork.
    pub pieces: Vec<String>,
    /// Number of piece keys that have artwork.
    pub piece_count: usize,
}
