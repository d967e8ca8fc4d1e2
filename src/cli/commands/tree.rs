//! CLI command for displaying the menu tree
//!
//! Implements the `keynav tree` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::core::menu::render_tree;
use crate::core::menu_file::MenuFile;
use crate::infra::dirs::resolve_menu_path;

/// Execute the tree command
pub fn execute(config: Option<PathBuf>, json: bool) -> Result<()> {
    let path = resolve_menu_path(config)?;
    let (file, menu) = MenuFile::load_menu(&path)
        .with_context(|| format!("Failed to load menu file '{}'", path.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&menu)?);
    } else {
        print!("{}", render_tree(&menu, &file.title));
    }
    Ok(())
}
