//! Check command implementation
//!
//! Implements `keynav check` to validate the menu file without
//! launching the navigator.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::output::status;
use crate::core::menu_file::MenuFile;
use crate::infra::dirs::resolve_menu_path;

/// Execute the check command
pub fn execute(config: Option<PathBuf>) -> Result<()> {
    let path = resolve_menu_path(config)?;

    println!("Checking menu file {}...\n", path.display());

    let file = MenuFile::load(&path)
        .with_context(|| format!("Failed to load menu file '{}'", path.display()))?;

    match file.build_menu() {
        Ok(menu) => {
            let stats = menu.stats();
            println!("{} Menu file is valid", status::SUCCESS);
            println!("  Title: {}", file.title);
            println!("  Top-level entries: {}", menu.len());
            println!("  Submenus: {}", stats.submenus);
            println!("  Actions: {}", stats.actions);
            println!("  Deepest level: {}", stats.max_depth);
            Ok(())
        }
        Err(e) => {
            println!("{} Menu file has errors", status::ERROR);
            Err(e.into())
        }
    }
}
