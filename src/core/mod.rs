//! Core business logic module
//!
//! This module contains all business logic for keynav.
//! It has NO terminal or process side effects - those belong in
//! [`crate::infra`] and [`crate::cli`].
//!
//! # Submodules
//!
//! - [`menu`] - Menu tree model and keystroke resolution
//! - [`engine`] - Navigation state machine
//! - [`menu_file`] - Menu file (keynav.toml) parsing and validation

pub mod engine;
pub mod menu;
pub mod menu_file;
