//! Remove entry command

use colored::Colorize;

use super::helpers::{WorkingDocument, print_size_summary};
use crate::config::AppConfig;
use crate::errors::EntryFormError;
use crate::interfaces::cli::CliError;

pub fn remove_entry(config: &AppConfig, file: Option<&str>, index: usize) -> Result<(), CliError> {
    let mut doc = WorkingDocument::open(config, file)?;

    let removed = doc
        .model
        .remove_entry(index)
        .map_err(EntryFormError::from)?;

    let metrics = doc.model.compute_metrics();
    doc.save()?;

    println!(
        "{} Removed entry #{}: {}",
        "✓".bold().green(),
        index.to_string().magenta(),
        removed.content.cyan()
    );
    print_size_summary(&metrics);
    Ok(())
}
