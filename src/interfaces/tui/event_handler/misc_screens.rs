//! Event handlers for Help and Exiting

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};

pub fn handle_help_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    if matches!(
        key_code,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('?')
    ) {
        app.current_screen = CurrentScreen::Main;
    }
    Ok(false)
}

pub fn handle_exiting_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') => Ok(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.current_screen = CurrentScreen::Main;
            Ok(false)
        }
        _ => Ok(false),
    }
}
