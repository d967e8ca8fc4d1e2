//! Output formatting
//!
//! This module provides utilities for displaying colored status
//! prefixes, the tracing filter derived from the CLI flags, and
//! formatted error messages.

use tracing_subscriber::EnvFilter;

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";

    /// Info prefix (blue circle)
    pub const INFO: &str = "ℹ";
}

/// Global output verbosity derived from the CLI flags
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    quiet: bool,
    verbose: u8,
}

impl OutputConfig {
    /// Create an output configuration from the CLI flags
    pub fn new(quiet: bool, verbose: u8) -> Self {
        Self { quiet, verbose }
    }

    /// Tracing filter: `RUST_LOG` wins, otherwise the flag-derived level
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.default_level()))
    }

    fn default_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                _ => "debug",
            }
        }
    }
}

/// Print an error and its cause chain to stderr
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} {error}", status::ERROR);
    for cause in error.chain().skip(1) {
        eprintln!("  caused by: {cause}");
    }
}
