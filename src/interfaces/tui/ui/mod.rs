// UI submodules
mod common;
mod delete_confirm;
mod exiting;
mod export_filename;
mod help;
mod import_path;
mod main_screen;
pub mod widgets;

pub use common::{draw_footer, draw_status_bar, draw_title_bar};

pub use delete_confirm::draw_delete_confirm_screen;
pub use exiting::draw_exiting_screen;
pub use export_filename::draw_export_filename_screen;
pub use help::draw_help_screen;
pub use import_path::draw_import_path_screen;
pub use main_screen::draw_main_screen;

use super::app::{App, CurrentScreen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &mut App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(15),   // Main content
            Constraint::Length(3), // Status
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    draw_title_bar(frame, app, main_chunks[0]);

    // 弹窗叠加在主界面之上
    draw_main_screen(frame, app, main_chunks[1]);
    match app.current_screen {
        CurrentScreen::Main => {}
        CurrentScreen::DeleteConfirm => draw_delete_confirm_screen(frame, app, main_chunks[1]),
        CurrentScreen::ImportPath => draw_import_path_screen(frame, app, main_chunks[1]),
        CurrentScreen::ExportFileName => draw_export_filename_screen(frame, app, main_chunks[1]),
        CurrentScreen::Help => draw_help_screen(frame, main_chunks[1]),
        CurrentScreen::Exiting => draw_exiting_screen(frame, app, main_chunks[1]),
    }

    draw_status_bar(frame, app, main_chunks[2]);
    draw_footer(frame, app, main_chunks[3]);
}
