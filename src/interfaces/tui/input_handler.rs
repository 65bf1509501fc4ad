//! Input handling utilities
//!
//! Text editing for the single-line inputs shared across screens

use super::app::App;

/// Handle text character input in the entry form
pub fn handle_text_input(app: &mut App, c: char) {
    if app.form_focused() {
        app.form.push_char(c);
        // Trigger real-time validation
        app.validate_inputs();
    }
}

/// Handle backspace in the entry form
pub fn handle_backspace(app: &mut App) {
    if app.form_focused() {
        app.form.pop_char();
        app.validate_inputs();
    }
}

/// Handle tab key: Title -> Content -> table -> Title
pub fn handle_tab_navigation(app: &mut App) {
    app.toggle_editing();
}

/// Edit a standalone line input (import path, export file name)
pub fn edit_line(input: &mut String, c: Option<char>) {
    match c {
        Some(c) => input.push(c),
        None => {
            input.pop();
        }
    }
}
