//! Run command implementation
//!
//! Loads the menu file and hands control to the interactive navigator.
//! Also the default behavior when keynav is invoked without a command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::tui::Navigator;
use crate::core::menu_file::MenuFile;
use crate::infra::dirs::resolve_menu_path;

/// Execute the run command
pub fn execute(config: Option<PathBuf>) -> Result<()> {
    let path = resolve_menu_path(config)?;
    let (file, menu) = MenuFile::load_menu(&path)
        .with_context(|| format!("Failed to load menu file '{}'", path.display()))?;

    tracing::info!(path = %path.display(), "menu loaded");

    let mut navigator = Navigator::new(file, menu, path);
    navigator.run()
}
