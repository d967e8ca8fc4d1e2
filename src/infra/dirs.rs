//! Menu file location
//!
//! Resolution order: explicit `--config` path, then `keynav.toml` in the
//! current directory, then the per-user configuration directory.

use std::path::PathBuf;

use crate::config::defaults::{CONFIG_DIR_NAME, MENU_FILE_NAME};
use crate::error::ConfigError;

/// Menu file location in the per-user configuration directory
/// (e.g. `~/.config/keynav/keynav.toml` on Linux)
pub fn user_menu_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(MENU_FILE_NAME))
}

/// Resolve the menu file path for this invocation.
///
/// An explicit override is taken as-is (existence is checked later by
/// the loader so the error message names the actual path). Otherwise a
/// `keynav.toml` in the working directory wins over the per-user file.
pub fn resolve_menu_path(explicit: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    let local = PathBuf::from(MENU_FILE_NAME);
    if local.exists() {
        return Ok(local);
    }
    if let Some(user) = user_menu_path() {
        return Ok(user);
    }
    Err(ConfigError::NotFound { path: local })
}
