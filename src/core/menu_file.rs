//! Menu file (keynav.toml) parsing and validation
//!
//! The menu file is the single configuration input: a tree of entries,
//! each carrying either a nested `items` list or one `action` table.
//! Arrays of tables keep declaration order, which is the display order.
//!
//! Structural validation runs once at load time and is fatal: a node
//! with both a submenu and an action (or neither), duplicate sibling
//! keys, or an unreachable reserved key all reject the whole file
//! before the navigator starts.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::defaults::{DEFAULT_EDITOR, DEFAULT_TITLE};
use crate::core::menu::{Action, Menu, MenuNode, NodeKind};
use crate::error::{ConfigError, ValidationError};

/// The parsed menu file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuFile {
    /// Title shown in the navigator header
    #[serde(default = "default_title")]
    pub title: String,

    /// External tool configuration
    #[serde(default)]
    pub tools: ToolsConfig,

    /// Top-level menu entries in display order
    #[serde(default)]
    pub menu: Vec<EntrySpec>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

/// External tool configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolsConfig {
    /// Command used for `open_editor` actions
    #[serde(default = "default_editor")]
    pub editor: String,
}

fn default_editor() -> String {
    DEFAULT_EDITOR.to_string()
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            editor: default_editor(),
        }
    }
}

/// One entry in the menu file.
///
/// `items` and `action` are both optional in the schema so that the
/// exactly-one rule can be reported as a validation error with the
/// offending key path instead of an opaque deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntrySpec {
    /// Selector key, unique among siblings
    pub key: String,

    /// Human-readable label
    pub label: String,

    /// Child entries (submenu nodes only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<EntrySpec>,

    /// Action to launch (leaf nodes only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionSpec>,
}

/// Action table in the menu file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionSpec {
    /// Open a folder or file in the configured editor
    OpenEditor { path: PathBuf },
    /// Open a URL in the system browser
    OpenUrl { url: String },
    /// Launch an application by name
    OpenApp { app: String },
}

impl From<ActionSpec> for Action {
    fn from(spec: ActionSpec) -> Self {
        match spec {
            ActionSpec::OpenEditor { path } => Action::OpenEditor { path },
            ActionSpec::OpenUrl { url } => Action::OpenUrl { url },
            ActionSpec::OpenApp { app } => Action::OpenApp { app },
        }
    }
}

impl MenuFile {
    /// Load the menu file from disk
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse a menu file from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse { source: e })
    }

    /// Serialize back to TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Validate the structure and build the navigable menu tree
    pub fn build_menu(&self) -> Result<Menu, ValidationError> {
        if self.menu.is_empty() {
            return Err(ValidationError::EmptyMenu);
        }
        build_level(&self.menu, "menu")
    }

    /// Load and validate in one step; any failure is fatal to the caller
    pub fn load_menu(path: &Path) -> Result<(Self, Menu), ConfigError> {
        let file = Self::load(path)?;
        let menu = file.build_menu()?;
        Ok((file, menu))
    }
}

fn build_level(entries: &[EntrySpec], parent_path: &str) -> Result<Menu, ValidationError> {
    let mut nodes = Vec::with_capacity(entries.len());
    for (idx, entry) in entries.iter().enumerate() {
        let path = format!("{parent_path}.{}", display_key(entry, idx));
        validate_key(entry, parent_path, &path)?;

        for earlier in &entries[..idx] {
            if earlier.key.eq_ignore_ascii_case(&entry.key) {
                return Err(ValidationError::DuplicateKey {
                    key: entry.key.clone(),
                    path: parent_path.to_string(),
                });
            }
        }

        let kind = match (&entry.action, entry.items.is_empty()) {
            (Some(_), false) => {
                return Err(ValidationError::BothSubmenuAndAction { path });
            }
            (None, true) => {
                return Err(ValidationError::NoSubmenuOrAction { path });
            }
            (Some(action), true) => NodeKind::Action(action.clone().into()),
            (None, false) => NodeKind::Submenu(build_level(&entry.items, &path)?),
        };

        nodes.push(MenuNode {
            key: entry.key.clone(),
            label: entry.label.clone(),
            kind,
        });
    }
    Ok(Menu::new(nodes))
}

fn validate_key(entry: &EntrySpec, parent_path: &str, path: &str) -> Result<(), ValidationError> {
    if entry.key.trim().is_empty() {
        return Err(ValidationError::EmptyKey {
            path: path.to_string(),
        });
    }
    // Both case variants of "q" are control keystrokes, so an entry keyed
    // "q" could never be selected.
    if entry.key.eq_ignore_ascii_case("q") {
        return Err(ValidationError::ReservedKey {
            key: entry.key.clone(),
            path: parent_path.to_string(),
        });
    }
    Ok(())
}

fn display_key(entry: &EntrySpec, idx: usize) -> String {
    if entry.key.trim().is_empty() {
        format!("#{}", idx + 1)
    } else {
        entry.key.clone()
    }
}
