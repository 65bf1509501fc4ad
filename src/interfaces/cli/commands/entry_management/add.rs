//! Add entry command

use colored::Colorize;

use super::helpers::{WorkingDocument, normalize, print_size_summary};
use crate::config::AppConfig;
use crate::interfaces::cli::CliError;

pub fn add_entry(
    config: &AppConfig,
    file: Option<&str>,
    title: String,
    content: String,
) -> Result<(), CliError> {
    let mut doc = WorkingDocument::open(config, file)?;
    let title = normalize(&title);
    let content = normalize(&content);

    let index = doc
        .model
        .add_entry(title, content)
        .map_err(crate::errors::EntryFormError::from)?;

    let metrics = doc.model.compute_metrics();
    doc.save()?;

    if title.is_empty() {
        println!(
            "{} Added entry #{}: {}",
            "✓".bold().green(),
            index.to_string().magenta(),
            content.cyan()
        );
    } else {
        println!(
            "{} Added entry #{}: {} - {}",
            "✓".bold().green(),
            index.to_string().magenta(),
            title.bold(),
            content.cyan()
        );
    }
    print_size_summary(&metrics);
    Ok(())
}
