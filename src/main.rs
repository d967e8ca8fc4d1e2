//! KeyNav CLI - Keyboard-driven menu navigator
//!
//! Entry point for the keynav command-line application.

use anyhow::Result;
use clap::Parser;

use keynav::cli::output::{display_error, OutputConfig};
use keynav::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    let output_config = OutputConfig::new(cli.quiet, cli.verbose);
    tracing_subscriber::fmt()
        .with_env_filter(output_config.env_filter())
        .with_writer(std::io::stderr)
        .init();

    // Run the command and handle errors
    match cli.run() {
        Ok(()) => Ok(()),
        Err(e) => {
            display_error(&e);
            std::process::exit(1);
        }
    }
}
