//! Edit entry command

use colored::Colorize;

use super::helpers::{WorkingDocument, normalize, print_size_summary};
use crate::config::AppConfig;
use crate::errors::EntryFormError;
use crate::interfaces::cli::CliError;

pub fn edit_entry(
    config: &AppConfig,
    file: Option<&str>,
    index: usize,
    title: Option<String>,
    content: Option<String>,
) -> Result<(), CliError> {
    if title.is_none() && content.is_none() {
        return Err(CliError::ParseError(
            "Nothing to change: pass --title and/or --content".to_string(),
        ));
    }

    let mut doc = WorkingDocument::open(config, file)?;

    // 未指定的字段保留原值
    let current = doc
        .model
        .begin_edit(index)
        .map_err(EntryFormError::from)?
        .clone();
    let new_title = title.as_deref().map(normalize).unwrap_or(current.title.as_str());
    let new_content = content.as_deref().map(normalize).unwrap_or(current.content.as_str());

    doc.model
        .save_edit(new_title, new_content)
        .map_err(EntryFormError::from)?;

    let metrics = doc.model.compute_metrics();
    doc.save()?;

    println!(
        "{} Updated entry #{}",
        "✓".bold().green(),
        index.to_string().magenta()
    );
    if current.title != new_title {
        println!(
            "  Title:   {} -> {}",
            current.title.dimmed(),
            new_title.bold()
        );
    }
    if current.content != new_content {
        println!(
            "  Content: {} -> {}",
            current.content.dimmed(),
            new_content.cyan()
        );
    }
    print_size_summary(&metrics);
    Ok(())
}
