//! Error types for keynav
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Menu file loading errors
///
/// All variants are fatal: the navigator is never started without a
/// fully loaded and validated menu tree.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Menu file not found
    #[error("Menu file not found at '{path}'. Run 'keynav init' to create one.")]
    NotFound { path: PathBuf },

    /// IO error while reading the menu file
    #[error("Failed to read menu file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// TOML parse error
    #[error("Failed to parse menu file: {source}")]
    Parse { source: toml::de::Error },

    /// Structural validation error
    #[error("Invalid menu definition: {0}")]
    Validation(#[from] ValidationError),
}

/// Structural validation errors for the menu tree
///
/// Validation happens once at load time so that a malformed entry fails
/// the whole process up front instead of surfacing mid-navigation.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Entry declares both a submenu and an action
    #[error("Entry '{path}' has both a submenu and an action (exactly one is allowed)")]
    BothSubmenuAndAction { path: String },

    /// Entry declares neither a submenu nor an action
    #[error("Entry '{path}' has neither a submenu nor an action")]
    NoSubmenuOrAction { path: String },

    /// Two siblings share a key
    #[error("Duplicate key '{key}' under '{path}'")]
    DuplicateKey { key: String, path: String },

    /// Entry key is empty
    #[error("Entry '{path}' has an empty key")]
    EmptyKey { path: String },

    /// Entry key collides with a control keystroke in every case variant
    #[error("Key '{key}' under '{path}' is reserved for navigation and would be unreachable")]
    ReservedKey { key: String, path: String },

    /// Menu file defines no top-level entries
    #[error("Menu file defines no top-level entries")]
    EmptyMenu,
}
