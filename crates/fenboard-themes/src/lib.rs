//! Board theme catalog and lookup.
//!
//! This crate provides the visual half of the rendering pipeline: named
//! themes bundling board square colors with base64-encoded piece artwork.
//! It includes a built-in catalog that is compiled into the library and
//! supports custom theme files.

pub mod builtin;
pub mod catalog;
pub mod theme;

pub use builtin::{builtin_catalog, DEFAULT_THEME};
pub use catalog::{ThemeCatalog, ThemeError};
pub use theme::{BoardColors, Theme, ThemeInfo};
