//! Event handlers for file screens
//!
//! Handles: ImportPath, ExportFileName

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::input_handler::edit_line;

/// Handle import path input
pub fn handle_import_path_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Enter => {
            match app.import_from_path() {
                Ok(count) => {
                    app.set_status(format!("Imported {} entries", count));
                    app.warn_if_over_limit();
                    app.import_path_input.clear();
                }
                Err(e) => app.set_error(e.format_simple()),
            }
            app.current_screen = CurrentScreen::Main;
        }
        KeyCode::Esc => {
            app.current_screen = CurrentScreen::Main;
        }
        KeyCode::Backspace => edit_line(&mut app.import_path_input, None),
        KeyCode::Char(c) => edit_line(&mut app.import_path_input, Some(c)),
        _ => {}
    }
    Ok(false)
}

/// Handle export filename input
pub fn handle_export_filename_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Enter => {
            match app.export_to_file() {
                Ok(path) => app.set_status(format!("Exported {} entries to {}", app.model.len(), path)),
                Err(e) => app.set_error(e.format_simple()),
            }
            app.current_screen = CurrentScreen::Main;
        }
        KeyCode::Esc => {
            app.current_screen = CurrentScreen::Main;
        }
        KeyCode::Backspace => edit_line(&mut app.export_filename_input, None),
        KeyCode::Char(c) => edit_line(&mut app.export_filename_input, Some(c)),
        _ => {}
    }
    Ok(false)
}
