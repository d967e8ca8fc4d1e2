//! TUI (Terminal User Interface) module
//!
//! Provides the interactive keystroke-driven menu navigator.

pub mod navigator;

pub use navigator::Navigator;
