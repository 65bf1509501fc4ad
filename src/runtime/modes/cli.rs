//! CLI mode
//!
//! Loads configuration, sets up logging and the panic hook, then delegates
//! to the actual CLI implementation.

use crate::cli::Commands;
use crate::interfaces::cli::{CliError, run_cli_command};
use crate::system::{RunMode, init_logging, install_panic_hook};

/// Run CLI mode
pub fn run_cli(
    command: Commands,
    config_path: Option<&str>,
    file: Option<&str>,
) -> Result<(), CliError> {
    let config = super::load_config(config_path, Some(&command))?;
    // Guard must outlive the command so buffered log lines are flushed
    let _guard = init_logging(&config.logging, RunMode::Cli)?;
    install_panic_hook(RunMode::Cli);

    run_cli_command(command, &config, file)
}
