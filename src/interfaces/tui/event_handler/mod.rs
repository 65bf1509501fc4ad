//! Event handling for TUI
//!
//! Handles keyboard events and delegates to appropriate handlers
//!
//! This module is organized by screen type:
//! - entry_screens: Main (form + table), DeleteConfirm
//! - file_screens: ImportPath, ExportFileName
//! - misc_screens: Help, Exiting

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};

mod entry_screens;
mod file_screens;
mod misc_screens;

use entry_screens::*;
use file_screens::*;
use misc_screens::*;

/// Handle keyboard input based on current screen
///
/// Returns true when the application should exit.
pub fn handle_key_event(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match app.current_screen {
        CurrentScreen::Main => handle_main_screen(app, key_code),
        CurrentScreen::DeleteConfirm => handle_delete_confirm_screen(app, key_code),
        CurrentScreen::ImportPath => handle_import_path_screen(app, key_code),
        CurrentScreen::ExportFileName => handle_export_filename_screen(app, key_code),
        CurrentScreen::Help => handle_help_screen(app, key_code),
        CurrentScreen::Exiting => handle_exiting_screen(app, key_code),
    }
}
