//! Mode routing
//!
//! This module provides unified entry points for the execution modes:
//! - CLI mode (Command-line interface)
//! - TUI mode (Terminal UI)
//!
//! The mode selection is based on the parsed command line and feature flags.

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "cli")]
pub use cli::run_cli;

#[cfg(feature = "tui")]
pub use tui::run_tui;

use colored::Colorize;

use crate::cli::{Cli, Commands};
use crate::config::AppConfig;
use crate::errors::Result;

/// Mode detection result
#[derive(Debug, PartialEq)]
pub enum Mode {
    #[cfg(feature = "cli")]
    Cli,
    #[cfg(feature = "tui")]
    Tui,
    /// No subcommand given
    Help,
}

/// Detect which mode to run based on the parsed command line
pub fn detect_mode(cli: &Cli) -> Mode {
    match &cli.command {
        #[cfg(feature = "tui")]
        Some(Commands::Tui) => Mode::Tui,
        #[cfg(feature = "cli")]
        Some(_) => Mode::Cli,
        _ => Mode::Help,
    }
}

/// Load configuration for a run
///
/// `config generate` must work even when the existing file is broken, so it
/// falls back to defaults instead of failing.
pub fn load_config(path: Option<&str>, command: Option<&Commands>) -> Result<AppConfig> {
    match AppConfig::load(path) {
        Ok(config) => Ok(config),
        Err(e) if matches!(command, Some(Commands::Config { .. })) => {
            // 日志尚未初始化，直接输出到 stderr
            eprintln!(
                "{} Ignoring invalid configuration: {}",
                "⚠".bold().yellow(),
                e.format_simple()
            );
            Ok(AppConfig::default())
        }
        Err(e) => Err(e),
    }
}
