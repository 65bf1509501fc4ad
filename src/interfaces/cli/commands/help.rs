use colored::Colorize;
use std::env;

pub fn show_help() {
    let program_name = env::args()
        .next()
        .unwrap_or_else(|| "entryform".to_string());
    println!("{}", "entryform - Title/Content entry editor".bold().magenta());
    println!();
    println!("{}", "Usage:".bold());
    println!(
        "  {} tui                         # start TUI mode (requires 'tui' feature)",
        program_name.cyan()
    );
    println!(
        "  {} help                        # show help",
        program_name.cyan()
    );
    println!();
    println!("{}", "Entry management:".bold());
    println!(
        "  {} add <content> [--title T]   # append an entry",
        program_name.cyan()
    );
    println!(
        "  {} edit <index> [options]      # change title and/or content",
        program_name.cyan()
    );
    println!(
        "  {} remove <index>              # remove an entry",
        program_name.cyan()
    );
    println!(
        "  {} list                        # list all entries",
        program_name.cyan()
    );
    println!(
        "  {} stats [--json]              # character totals and size",
        program_name.cyan()
    );
    println!(
        "  {} validate <content> [--title T] # check without adding",
        program_name.cyan()
    );
    println!(
        "  {} import <file path>          # replace entries from JSON",
        program_name.cyan()
    );
    println!(
        "  {} export [file path]          # write compact JSON (default data.json)",
        program_name.cyan()
    );
    println!(
        "  {} config generate [path]      # generate sample config file",
        program_name.cyan()
    );
    println!();
    println!("{}", "Options:".bold());
    println!(
        "  {}  working document (default: data.json)",
        "--file".yellow()
    );
    println!("  {} configuration file", "--config".yellow());
    println!("  {}   new title for add/edit/validate", "--title".yellow());
    println!("  {} new content for edit", "--content".yellow());
    println!();
    println!(
        "{}",
        "Indices are 0-based. Titles are optional (max 25 chars), content is required (max 150 chars)."
            .dimmed()
    );
}
