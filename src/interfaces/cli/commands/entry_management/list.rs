//! List entries command

use colored::Colorize;

use super::helpers::{WorkingDocument, ellipsize, print_size_summary};
use crate::config::AppConfig;
use crate::interfaces::cli::CliError;

const CONTENT_COLUMN_WIDTH: usize = 48;

pub fn list_entries(config: &AppConfig, file: Option<&str>) -> Result<(), CliError> {
    let doc = WorkingDocument::open(config, file)?;
    let entries = doc.model.entries();

    if entries.is_empty() {
        println!(
            "{} No entries in {}",
            "ℹ".bold().blue(),
            doc.file.display_path().cyan()
        );
        return Ok(());
    }

    println!("{}", "Entry list:".bold().green());
    println!();
    println!(
        "  {:>3}  {:<25}  {:<width$}  {:>5}  {:>5}",
        "#".bold(),
        "Title".bold(),
        "Content".bold(),
        "T.len".bold(),
        "C.len".bold(),
        width = CONTENT_COLUMN_WIDTH
    );
    for (i, entry) in entries.iter().enumerate() {
        // 按字符数补齐，避免多字节文本错位
        let title = pad(&entry.title, 25);
        let content = pad(&ellipsize(&entry.content, CONTENT_COLUMN_WIDTH), CONTENT_COLUMN_WIDTH);
        println!(
            "  {:>3}  {}  {}  {:>5}  {:>5}",
            i.to_string().magenta(),
            title.cyan(),
            content,
            entry.title_len().to_string().dimmed(),
            entry.content_len().to_string().dimmed()
        );
    }
    println!();
    println!(
        "{} Total {} entries",
        "ℹ".bold().blue(),
        entries.len().to_string().green()
    );
    print_size_summary(&doc.model.compute_metrics());
    Ok(())
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}
