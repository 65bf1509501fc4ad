//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for entryform using clap's derive macros.

use clap::{Parser, Subcommand};

/// entryform - A Title/Content entry editor with size-limited JSON export
#[derive(Parser)]
#[command(name = "entryform")]
#[command(version)]
#[command(about = "Build a small list of Title/Content entries and export it as JSON", long_about = None)]
pub struct Cli {
    /// Configuration file (default: entryform.toml if present)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    /// Working document (default: editor.data_file)
    #[arg(long, short = 'f', global = true)]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start TUI mode
    #[cfg(feature = "tui")]
    Tui,

    /// Add an entry to the working document
    Add {
        /// Entry content (required, up to 150 characters)
        content: String,

        /// Entry title (optional, up to 25 characters)
        #[arg(long, short = 't', default_value = "")]
        title: String,
    },

    /// Edit the entry at INDEX
    ///
    /// Fields that are not given keep their current value.
    Edit {
        /// 0-based entry index
        index: usize,

        /// New title
        #[arg(long, short = 't')]
        title: Option<String>,

        /// New content
        #[arg(long)]
        content: Option<String>,
    },

    /// Remove the entry at INDEX
    Remove {
        /// 0-based entry index
        index: usize,
    },

    /// List all entries
    List,

    /// Show character totals and serialized size
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replace the working document with the entries of another file
    Import {
        /// Input file path
        file_path: String,
    },

    /// Export entries as compact JSON
    Export {
        /// Output file path (default: data.json)
        file_path: Option<String>,
    },

    /// Check an entry without adding it
    Validate {
        /// Entry content
        content: String,

        /// Entry title
        #[arg(long, short = 't', default_value = "")]
        title: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: entryform.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}
