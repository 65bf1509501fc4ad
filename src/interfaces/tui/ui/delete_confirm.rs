use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::widgets::Popup;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::popup;

pub fn draw_delete_confirm_screen(frame: &mut Frame, app: &App, area: Rect) {
    let Some(entry) = app.get_selected_entry() else {
        return;
    };

    let inner_area = Popup::new("Confirm Remove", popup::DELETE_CONFIRM)
        .theme_color(Color::Red)
        .margin(Margin::new(2, 2))
        .render(frame, area);

    let title = if entry.title.is_empty() {
        "(no title)"
    } else {
        entry.title.as_str()
    };

    let text = vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            format!("Remove entry #{}?", app.selected_index),
            Style::default().fg(Color::Yellow).bold(),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Title: ", Style::default().fg(Color::DarkGray)),
            Span::styled(title, Style::default().fg(Color::Cyan).bold()),
        ]),
        Line::from(vec![
            Span::styled("Content: ", Style::default().fg(Color::DarkGray)),
            Span::styled(&entry.content, Style::default().fg(Color::White)),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Later entries move up by one.",
            Style::default().fg(Color::DarkGray),
        )]),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(ratatui::layout::Alignment::Center)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, inner_area);
}
