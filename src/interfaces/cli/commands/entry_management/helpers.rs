//! Helper functions for entry management CLI commands

use colored::Colorize;
use tracing::debug;

use crate::config::AppConfig;
use crate::interfaces::cli::CliError;
use crate::model::{EntryListModel, Metrics, format_kb};
use crate::storage::{DocumentFile, open_document};

/// The document a command loads, mutates and saves back
pub struct WorkingDocument {
    pub model: EntryListModel,
    pub file: DocumentFile,
}

impl WorkingDocument {
    /// Load `path` (or `editor.data_file`) into a fresh model
    pub fn open(config: &AppConfig, path: Option<&str>) -> Result<Self, CliError> {
        let path = path.unwrap_or(&config.editor.data_file);
        let (model, file) = open_document(path, config.editor.policy())?;
        debug!("Opened working document {} ({} entries)", path, model.len());
        Ok(Self { model, file })
    }

    /// Write the model back; an over-limit list is still saved
    pub fn save(&self) -> Result<(), CliError> {
        let bytes = self.file.save_from(&self.model)?;
        println!(
            "{} Saved {} ({})",
            "✓".bold().green(),
            self.file.display_path().cyan(),
            format_kb(bytes).dimmed()
        );
        Ok(())
    }
}

/// Collaborators trim user input before it reaches the model
pub fn normalize(input: &str) -> &str {
    input.trim()
}

/// One-line size summary printed after mutating commands
pub fn print_size_summary(metrics: &Metrics) {
    println!(
        "{} Total content characters: {}  Size: {} / {}",
        "ℹ".bold().blue(),
        metrics.total_content_chars.to_string().green(),
        format_kb(metrics.serialized_size).cyan(),
        format_kb(metrics.size_limit).dimmed()
    );
    if let Some(warning) = metrics.warning() {
        println!("{} {}", "⚠".bold().yellow(), warning.yellow());
    }
}

/// Truncate `text` to `max` characters for table display
pub fn ellipsize(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
