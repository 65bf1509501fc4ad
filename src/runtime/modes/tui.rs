//! TUI mode
//!
//! This module contains the TUI (Terminal User Interface) mode startup logic.
//! It delegates to the actual TUI implementation.

use crate::storage::open_document;
use crate::system::{RunMode, init_logging, install_panic_hook};

/// Run TUI mode
///
/// The working document is loaded before the terminal switches to raw mode
/// so that a broken file is reported on the normal console.
pub fn run_tui(config_path: Option<&str>, file: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path, None)?;
    let _guard = init_logging(&config.logging, RunMode::Tui)?;
    install_panic_hook(RunMode::Tui);

    let path = file.unwrap_or(&config.editor.data_file);
    let (model, document) = open_document(path, config.editor.policy())?;

    crate::interfaces::tui::run_tui(config, model, document)
}
