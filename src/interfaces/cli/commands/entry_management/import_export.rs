//! Import/Export commands for entries

use colored::Colorize;
use tracing::info;

use super::helpers::{WorkingDocument, print_size_summary};
use crate::config::AppConfig;
use crate::errors::EntryFormError;
use crate::interfaces::cli::CliError;
use crate::model::format_kb;
use crate::storage::{DEFAULT_DOCUMENT_FILE, DocumentFile};

/// Replace the working document with the entries of `file_path`
pub fn import_entries(
    config: &AppConfig,
    file: Option<&str>,
    file_path: String,
) -> Result<(), CliError> {
    let source = DocumentFile::new(&file_path);
    let text = source.read()?.ok_or_else(|| {
        CliError::StorageError(format!("Import file not found: {}", file_path))
    })?;

    let mut doc = WorkingDocument::open(config, file)?;
    let previous = doc.model.len();
    let count = doc
        .model
        .import_entries(&text)
        .map_err(EntryFormError::from)?;

    let metrics = doc.model.compute_metrics();
    doc.save()?;

    info!("Imported {} entries from {}", count, file_path);
    println!(
        "{} Imported {} entries from {} (replaced {})",
        "✓".bold().green(),
        count.to_string().green(),
        file_path.cyan(),
        previous
    );
    print_size_summary(&metrics);
    Ok(())
}

/// Export the working document as compact JSON
pub fn export_entries(
    config: &AppConfig,
    file: Option<&str>,
    file_path: Option<String>,
) -> Result<(), CliError> {
    let doc = WorkingDocument::open(config, file)?;
    let output = file_path.unwrap_or_else(|| DEFAULT_DOCUMENT_FILE.to_string());

    let bytes = DocumentFile::new(&output).export_from(&doc.model)?;

    println!(
        "{} Exported {} entries to {} ({})",
        "✓".bold().green(),
        doc.model.len().to_string().green(),
        output.cyan(),
        format_kb(bytes).dimmed()
    );
    Ok(())
}
