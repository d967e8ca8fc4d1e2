//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::PathBuf;
use tempfile::TempDir;

/// Test workspace context
///
/// Creates a temporary directory for menu files and provides
/// utilities for setting up test scenarios.
pub struct TestProject {
    /// Temporary directory for the test
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test workspace in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the test directory
    #[allow(dead_code)]
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Path to a file inside the test directory
    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Create a file in the test directory
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Check if a file exists in the test directory
    #[allow(dead_code)]
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test directory
    #[allow(dead_code)]
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Sample menu TOML for testing
#[allow(dead_code)]
pub const SAMPLE_MENU: &str = r#"
title = "Test Menu"

[tools]
editor = "vim"

[[menu]]
key = "d"
label = "Dev"

  [[menu.items]]
  key = "1"
  label = "Scratch"
  action = { type = "open_editor", path = "/tmp/scratch" }

  [[menu.items]]
  key = "g"
  label = "GitHub"
  action = { type = "open_url", url = "https://github.com" }

[[menu]]
key = "s"
label = "Slack"
action = { type = "open_app", app = "Slack" }
"#;

/// Menu TOML with a node that has both children and an action
#[allow(dead_code)]
pub const INVALID_BOTH_MENU: &str = r#"
[[menu]]
key = "d"
label = "Dev"
action = { type = "open_app", app = "Code" }

  [[menu.items]]
  key = "1"
  label = "Scratch"
  action = { type = "open_editor", path = "/tmp" }
"#;
