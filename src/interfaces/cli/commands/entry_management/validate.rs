//! Validate entry command (dry run)

use colored::Colorize;

use super::helpers::{WorkingDocument, normalize};
use crate::config::AppConfig;
use crate::errors::EntryFormError;
use crate::interfaces::cli::CliError;
use crate::model::{Entry, FieldCounter};

pub fn validate_entry(
    config: &AppConfig,
    file: Option<&str>,
    title: String,
    content: String,
) -> Result<(), CliError> {
    let doc = WorkingDocument::open(config, file)?;
    let policy = doc.model.policy();
    let title = normalize(&title);
    let content = normalize(&content);

    let title_counter = FieldCounter::new(title, policy.title_max_chars);
    let content_counter = FieldCounter::new(content, policy.content_max_chars);
    println!("  {}", counter_line(&title_counter, "Title"));
    println!("  {}", counter_line(&content_counter, "Content"));

    doc.model
        .validate_entry(title, content)
        .map_err(EntryFormError::from)?;

    let projected = doc
        .model
        .projected_size_with(&Entry::new(title, content));
    println!(
        "{} Entry is valid (document would be {} bytes of {})",
        "✓".bold().green(),
        projected,
        policy.size_limit_bytes
    );
    if projected > policy.size_limit_bytes {
        println!(
            "{} Adding it would put the document over the size limit",
            "⚠".bold().yellow()
        );
    }
    Ok(())
}

fn counter_line(counter: &FieldCounter, name: &str) -> String {
    let label = counter.label(name);
    if counter.is_exceeded() {
        label.red().to_string()
    } else {
        label.dimmed().to_string()
    }
}
