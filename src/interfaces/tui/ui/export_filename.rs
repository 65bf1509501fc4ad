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
use crate::model::format_kb;
use crate::storage::DEFAULT_DOCUMENT_FILE;

pub fn draw_export_filename_screen(frame: &mut Frame, app: &App, area: Rect) {
    let inner_area = Popup::new(" Export JSON ", popup::EXPORT_FILENAME)
        .theme_color(Color::Green)
        .margin(Margin::new(2, 1))
        .render(frame, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Instructions
            Constraint::Length(4), // Filename input
            Constraint::Length(2), // Preview
            Constraint::Min(0),
        ])
        .split(inner_area);

    let instructions = Paragraph::new(Line::from(vec![Span::styled(
        "Enter the file name for the exported JSON",
        Style::default().fg(Color::Gray),
    )]));
    frame.render_widget(instructions, chunks[0]);

    InputField::new("Filename", &app.export_filename_input)
        .active(true)
        .placeholder(DEFAULT_DOCUMENT_FILE)
        .render(frame, chunks[1]);

    let preview = match app.metrics.warning() {
        Some(warning) => Span::styled(warning, Style::default().fg(Color::Red)),
        None => Span::styled(
            format!(
                "Will save {} entries ({}) as: {}",
                app.model.len(),
                format_kb(app.metrics.serialized_size),
                app.export_target()
            ),
            Style::default().fg(Color::Cyan),
        ),
    };
    frame.render_widget(Paragraph::new(Line::from(preview)), chunks[2]);
}
