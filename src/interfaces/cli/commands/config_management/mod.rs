//! Configuration management CLI commands

mod config_gen;

use crate::cli::ConfigCommands;
use crate::interfaces::cli::CliError;

pub use config_gen::config_generate;

/// Run a config subcommand
pub fn run_config_command(cmd: ConfigCommands) -> Result<(), CliError> {
    match cmd {
        ConfigCommands::Generate { output_path, force } => config_generate(output_path, force),
    }
}
