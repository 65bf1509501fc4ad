//! Stats command

use colored::Colorize;

use super::helpers::WorkingDocument;
use crate::config::AppConfig;
use crate::interfaces::cli::CliError;
use crate::model::format_kb;

pub fn show_stats(config: &AppConfig, file: Option<&str>, json: bool) -> Result<(), CliError> {
    let doc = WorkingDocument::open(config, file)?;
    let metrics = doc.model.compute_metrics();

    if json {
        let out = serde_json::to_string_pretty(&metrics)
            .map_err(|e| CliError::CommandError(format!("Failed to encode stats: {}", e)))?;
        println!("{}", out);
        return Ok(());
    }

    println!("{}", "Document stats:".bold().green());
    println!("  File:                    {}", doc.file.display_path().cyan());
    println!("  Entries:                 {}", doc.model.len());
    println!(
        "  Total content characters: {}",
        metrics.total_content_chars.to_string().green()
    );
    println!(
        "  Serialized size:         {} ({} bytes)",
        format_kb(metrics.serialized_size).cyan(),
        metrics.serialized_size
    );
    println!(
        "  Limit:                   {} ({} bytes)",
        format_kb(metrics.size_limit),
        metrics.size_limit
    );

    match metrics.warning() {
        Some(warning) => println!("{} {}", "⚠".bold().yellow(), warning.yellow()),
        None => println!(
            "{} Within limit, {} bytes remaining",
            "✓".bold().green(),
            metrics.remaining()
        ),
    }
    Ok(())
}
