//! Command-line interface module
//!
//! This module handles argument parsing, output formatting, and the
//! interactive navigator. It contains no business logic - that belongs
//! in the [`crate::core`] module.

pub mod commands;
pub mod output;
pub mod tui;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use commands::Commands;

/// KeyNav - Keyboard-driven menu navigator
///
/// Navigate a tree of menus with single keystrokes and launch folders,
/// URLs, and applications from its leaves.
#[derive(Parser, Debug)]
#[command(name = "keynav")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the menu file (defaults to ./keynav.toml, then the
    /// per-user configuration directory)
    #[arg(short, long, global = true, env = "KEYNAV_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        match self.command {
            Some(cmd) => cmd.run(self.config),
            // No subcommand launches the navigator directly.
            None => commands::run::execute(self.config),
        }
    }
}
