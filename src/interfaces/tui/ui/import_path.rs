use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::{InputField, Popup};
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::popup;

pub fn draw_import_path_screen(frame: &mut Frame, app: &App, area: Rect) {
    let inner_area = Popup::new(" Import JSON ", popup::IMPORT_PATH)
        .theme_color(Color::Magenta)
        .margin(Margin::new(2, 1))
        .render(frame, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Instructions
            Constraint::Length(4), // Path input
            Constraint::Length(2), // Note
            Constraint::Min(0),
        ])
        .split(inner_area);

    let instructions = Paragraph::new(Line::from(vec![Span::styled(
        "Path to a JSON array of {\"Title\", \"Content\"} objects",
        Style::default().fg(Color::Gray),
    )]));
    frame.render_widget(instructions, chunks[0]);

    InputField::new("File", &app.import_path_input)
        .active(true)
        .placeholder("e.g. data.json")
        .render(frame, chunks[1]);

    let note = Paragraph::new(Line::from(vec![Span::styled(
        format!("Replaces all {} current entries", app.model.len()),
        Style::default().fg(Color::Yellow),
    )]));
    frame.render_widget(note, chunks[2]);
}
