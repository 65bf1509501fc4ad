use std::process::ExitCode;

use clap::Parser;

use entryform::cli::Cli;
use entryform::interfaces::cli::commands::show_help;
use entryform::runtime::modes::{self, Mode};

fn main() -> ExitCode {
    // .env 文件可选
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match modes::detect_mode(&cli) {
        #[cfg(feature = "tui")]
        Mode::Tui => {
            if let Err(e) = modes::run_tui(cli.config.as_deref(), cli.file.as_deref()) {
                eprintln!("TUI error: {:#}", e);
                return ExitCode::FAILURE;
            }
        }
        #[cfg(feature = "cli")]
        Mode::Cli => {
            let Some(command) = cli.command else {
                show_help();
                return ExitCode::SUCCESS;
            };
            if let Err(e) = modes::run_cli(command, cli.config.as_deref(), cli.file.as_deref()) {
                eprintln!("{}", e.format_colored());
                return ExitCode::FAILURE;
            }
        }
        Mode::Help => show_help(),
    }

    ExitCode::SUCCESS
}
