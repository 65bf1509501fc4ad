//! CLI interface module
//!
//! This module provides command-line interface functionality for entryform.

pub mod commands;

use crate::cli::Commands;
use crate::config::AppConfig;
use crate::errors::EntryFormError;
use commands::{
    add_entry, config_management, edit_entry, export_entries, import_entries, list_entries,
    remove_entry, show_stats, validate_entry,
};
use std::fmt;

#[derive(Debug)]
pub enum CliError {
    StorageError(String),
    ParseError(String),
    CommandError(String),
    Entry(EntryFormError),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::StorageError(msg) => format!("Storage error: {}", msg),
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
            CliError::Entry(err) => err.format_simple(),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::StorageError(msg) => {
                format!("{} {}", "Storage error:".red().bold(), msg.white())
            }
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
            CliError::Entry(err) => err.format_colored(),
        }
    }

    /// Underlying domain error, if any
    pub fn entry_error(&self) -> Option<&EntryFormError> {
        match self {
            CliError::Entry(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<EntryFormError> for CliError {
    fn from(err: EntryFormError) -> Self {
        match err {
            EntryFormError::FileOperation(msg) => CliError::StorageError(msg),
            other => CliError::Entry(other),
        }
    }
}

/// Run a CLI command from clap-parsed input
///
/// `file` overrides `editor.data_file` as the working document.
pub fn run_cli_command(
    cmd: Commands,
    config: &AppConfig,
    file: Option<&str>,
) -> Result<(), CliError> {
    match cmd {
        Commands::Add { content, title } => add_entry(config, file, title, content),

        Commands::Edit {
            index,
            title,
            content,
        } => edit_entry(config, file, index, title, content),

        Commands::Remove { index } => remove_entry(config, file, index),

        Commands::List => list_entries(config, file),

        Commands::Stats { json } => show_stats(config, file, json),

        Commands::Import { file_path } => import_entries(config, file, file_path),

        Commands::Export { file_path } => export_entries(config, file, file_path),

        Commands::Validate { content, title } => validate_entry(config, file, title, content),

        Commands::Config { action } => config_management::run_config_command(action),

        #[cfg(feature = "tui")]
        Commands::Tui => unreachable!("TUI handled in main"),
    }
}
