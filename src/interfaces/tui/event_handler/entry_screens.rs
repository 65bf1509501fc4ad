//! Event handlers for entry screens
//!
//! Handles: Main (form focus and table focus), DeleteConfirm

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen, EditingField};
use crate::interfaces::tui::input_handler::{
    handle_backspace, handle_tab_navigation, handle_text_input,
};

/// Handle main screen input
pub fn handle_main_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    if app.form_focused() {
        handle_form_keys(app, key_code);
    } else {
        handle_table_keys(app, key_code);
    }
    Ok(false)
}

fn handle_form_keys(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Enter => {
            app.submit_form();
        }
        KeyCode::Esc => {
            if app.model.is_editing() {
                app.cancel_edit();
            } else {
                app.focus_table();
            }
        }
        KeyCode::Tab => handle_tab_navigation(app),
        KeyCode::BackTab | KeyCode::Up => {
            if let Some(field) = app.form.currently_editing {
                app.focus_form(field.prev());
            }
        }
        KeyCode::Down => {
            if let Some(field) = app.form.currently_editing {
                app.focus_form(field.next());
            }
        }
        KeyCode::Backspace => handle_backspace(app),
        KeyCode::Char(c) => handle_text_input(app, c),
        _ => {}
    }
}

fn handle_table_keys(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => app.move_selection_down(),
        KeyCode::Home | KeyCode::Char('g') => app.jump_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.jump_to_bottom(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Tab | KeyCode::Char('a') | KeyCode::Char('A') => {
            app.focus_form(EditingField::Title);
        }
        KeyCode::Esc => {
            if app.model.is_editing() {
                app.cancel_edit();
            }
        }
        KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char('E') => {
            if !app.model.is_empty() {
                app.begin_edit_selected();
            }
        }
        KeyCode::Delete | KeyCode::Char('d') | KeyCode::Char('D') => {
            if !app.model.is_empty() {
                app.current_screen = CurrentScreen::DeleteConfirm;
            }
        }
        KeyCode::Char('i') | KeyCode::Char('I') => {
            app.current_screen = CurrentScreen::ImportPath;
        }
        KeyCode::Char('x') | KeyCode::Char('X') => {
            app.current_screen = CurrentScreen::ExportFileName;
        }
        KeyCode::Char('y') => app.copy_selected(false),
        KeyCode::Char('Y') => app.copy_selected(true),
        KeyCode::Char('?') | KeyCode::Char('h') | KeyCode::Char('H') => {
            app.current_screen = CurrentScreen::Help;
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.current_screen = CurrentScreen::Exiting;
        }
        _ => {}
    }
}

/// Handle delete confirmation screen input
pub fn handle_delete_confirm_screen(app: &mut App, key_code: KeyCode) -> std::io::Result<bool> {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.delete_selected_entry();
            app.current_screen = CurrentScreen::Main;
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.current_screen = CurrentScreen::Main;
        }
        _ => {}
    }
    Ok(false)
}
