//! Built-in theme data.
//!
//! This module provides access to the built-in theme catalog
//! that is compiled into the library.

use crate::catalog::ThemeCatalog;

/// Name of the theme used when callers do not pick one.
pub const DEFAULT_THEME: &str = "wikipedia";

/// JSON source for the compiled-in catalog, regenerated by
/// `tools/gen_builtin_themes.py`.
const BUILTIN_JSON: &str = include_str!("../data/builtin.json");

/// Creates the built-in theme catalog.
///
/// The catalog ships five themes (alpha, sakura, uscf, wikipedia and
/// wisteria), each with artwork for all twelve piece keys.
#[must_use]
pub fn builtin_catalog() -> ThemeCatalog {
    ThemeCatalog::from_json_str(BUILTIN_JSON).expect("built-in theme data is valid")
}
