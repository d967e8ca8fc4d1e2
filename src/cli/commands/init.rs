//! Init command implementation
//!
//! Implements `keynav init` to write a starter menu file.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::cli::output::status;
use crate::infra::dirs::user_menu_path;

/// Starter menu written by `keynav init`
const STARTER_MENU: &str = r#"title = "KeyNav"

[tools]
editor = "code"

[[menu]]
key = "d"
label = "Dev"

  [[menu.items]]
  key = "1"
  label = "Scratch folder"
  action = { type = "open_editor", path = "/tmp/scratch" }

  [[menu.items]]
  key = "2"
  label = "Dotfiles"
  action = { type = "open_editor", path = "~/dotfiles" }

[[menu]]
key = "w"
label = "Web"

  [[menu.items]]
  key = "g"
  label = "GitHub"
  action = { type = "open_url", url = "https://github.com" }

  [[menu.items]]
  key = "r"
  label = "Rust docs"
  action = { type = "open_url", url = "https://docs.rs" }

[[menu]]
key = "t"
label = "Terminal"
action = { type = "open_app", app = "Terminal" }
"#;

/// Execute the init command
pub fn execute(config: Option<PathBuf>, force: bool) -> Result<()> {
    let path = match config {
        Some(path) => path,
        None => user_menu_path().context("Unable to determine the user configuration directory")?,
    };

    if path.exists() && !force {
        bail!(
            "Menu file already exists at '{}'. Use --force to overwrite it.",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(&path, STARTER_MENU)
        .with_context(|| format!("Failed to write menu file '{}'", path.display()))?;

    println!("{} Created starter menu at {}", status::SUCCESS, path.display());
    println!("  Edit it, then launch the navigator with 'keynav'.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::menu_file::MenuFile;

    #[test]
    fn starter_menu_parses_and_validates() {
        let file = MenuFile::from_toml(STARTER_MENU).expect("starter must parse");
        let menu = file.build_menu().expect("starter must validate");
        assert_eq!(menu.len(), 3);
        let stats = menu.stats();
        assert_eq!(stats.submenus, 2);
        assert_eq!(stats.actions, 5);
    }
}
