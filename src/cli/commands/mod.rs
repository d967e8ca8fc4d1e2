//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod check;
pub mod init;
pub mod run;
pub mod tree;

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the interactive navigator (the default when no command is given)
    Run,

    /// Validate the menu file without launching the navigator
    Check,

    /// Print the menu tree
    Tree {
        /// Output the tree as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Create a starter menu file
    Init {
        /// Overwrite an existing menu file
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Execute the command
    pub fn run(self, config: Option<PathBuf>) -> Result<()> {
        match self {
            Self::Run => run::execute(config),
            Self::Check => check::execute(config),
            Self::Tree { json } => tree::execute(config, json),
            Self::Init { force } => init::execute(config, force),
        }
    }
}
