//! Theme catalog storage and lookup.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::theme::{Theme, ThemeInfo};

/// Errors that can occur when working with theme catalogs.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The requested theme is not in the catalog.
    #[error("theme '{name}' not found, available themes: {available:?}")]
    NotFound {
        name: String,
        available: Vec<String>,
    },

    /// Failed to read the theme file.
    #[error("failed to read theme file: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A named collection of themes, keyed by theme name.
///
/// Catalogs deserialize from JSON files of the form
/// `{ "<name>": { "board": [...], "pieces": {...} }, ... }` and keep
/// their entries in sorted name order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeCatalog {
    themes: BTreeMap<String, Theme>,
}

impl ThemeCatalog {
    /// Creates a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a catalog from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let data = fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    /// Returns the number of themes in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Returns true if the catalog contains no themes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Adds or replaces a theme under the given name.
    pub fn insert(&mut self, name: impl Into<String>, theme: Theme) {
        self.themes.insert(name.into(), theme);
    }

    /// Returns all theme names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.themes.keys().map(String::as_str).collect()
    }

    /// Looks up a theme by name.
    ///
    /// The error lists the available names so callers can surface them.
    pub fn get(&self, name: &str) -> Result<&Theme, ThemeError> {
        self.themes.get(name).ok_or_else(|| ThemeError::NotFound {
            name: name.to_string(),
            available: self.themes.keys().cloned().collect(),
        })
    }

    /// Returns the introspection summary for a theme.
    pub fn info(&self, name: &str) -> Result<ThemeInfo, ThemeError> {
        let theme = self.get(name)?;
        Ok(ThemeInfo {
            name: name.to_string(),
            board_colors: theme.board.clone(),
            pieces: theme.piece_keys().iter().map(|k| (*k).to_string()).collect(),
            piece_count: theme.pieces.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::theme::BoardColors;

    const SAMPLE_CATALOG: &str = r##"{
        "plain": {
            "board": ["#ffffff", "#888888"],
            "pieces": {
                "wK": ["aGVsbG8="]
            }
        },
        "dusk": {
            "board": ["#ccccff", "#333366"],
            "pieces": {
                "wK": ["aGVsbG8="],
                "bK": ["d29ybGQ="]
            }
        }
    }"##;

    #[test]
    fn test_empty_catalog() {
        let catalog = ThemeCatalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.names().is_empty());
    }

    #[test]
    fn test_from_json_str() {
        let catalog = ThemeCatalog::from_json_str(SAMPLE_CATALOG).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.names(), vec!["dusk", "plain"]);

        let plain = catalog.get("plain").unwrap();
        assert_eq!(plain.board.light(), "#ffffff");
        assert_eq!(plain.piece_keys(), vec!["wK"]);
    }

    #[test]
    fn test_get_unknown_lists_available() {
        let catalog = ThemeCatalog::from_json_str(SAMPLE_CATALOG).unwrap();
        let err = catalog.get("neon").unwrap_err();
        match err {
            ThemeError::NotFound { name, available } => {
                assert_eq!(name, "neon");
                assert_eq!(available, vec!["dusk".to_string(), "plain".to_string()]);
            }
            other => panic!("expected NotFound, got {other:?}"),
        }

        let msg = format!("{}", catalog.get("neon").unwrap_err());
        assert!(msg.contains("neon"));
        assert!(msg.contains("plain"));
    }

    #[test]
    fn test_info() {
        let catalog = ThemeCatalog::from_json_str(SAMPLE_CATALOG).unwrap();
        let info = catalog.info("dusk").unwrap();
        assert_eq!(info.name, "dusk");
        assert_eq!(info.board_colors, BoardColors::new("#ccccff", "#333366"));
        assert_eq!(info.pieces, vec!["bK".to_string(), "wK".to_string()]);
        assert_eq!(info.piece_count, 2);
    }

    #[test]
    fn test_info_unknown_theme() {
        let catalog = ThemeCatalog::from_json_str(SAMPLE_CATALOG).unwrap();
        assert!(matches!(
            catalog.info("neon"),
            Err(ThemeError::NotFound { .. })
        ));
    }

    #[test]
    fn test_insert_replaces() {
        let mut catalog = ThemeCatalog::new();
        catalog.insert("custom", Theme::new(BoardColors::new("#fff", "#000")));
        catalog.insert("custom", Theme::new(BoardColors::new("#eee", "#111")));

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("custom").unwrap().board.light(), "#eee");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_CATALOG.as_bytes()).unwrap();

        let catalog = ThemeCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get("dusk").is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ThemeCatalog::load(dir.path().join("nope.json"));
        assert!(matches!(result, Err(ThemeError::IoError(_))));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            ThemeCatalog::from_json_str("not json"),
            Err(ThemeError::JsonError(_))
        ));
        assert!(matches!(
            ThemeCatalog::from_json_str(r##"{"plain": {"board": "#fff"}}"##),
            Err(ThemeError::JsonError(_))
        ));
    }

    #[test]
    fn test_round_trip_through_json() {
        let catalog = ThemeCatalog::from_json_str(SAMPLE_CATALOG).unwrap();
        let json = serde_json::to_string(&catalog).unwrap();
        let reparsed = ThemeCatalog::from_json_str(&json).unwrap();
        assert_eq!(reparsed.names(), catalog.names());
        assert_eq!(
            reparsed.get("dusk").unwrap().piece_keys(),
            catalog.get("dusk").unwrap().piece_keys()
        );
    }
}
