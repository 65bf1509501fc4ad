use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::popup;

fn section(name: &str) -> Line<'_> {
    Line::from(vec![Span::styled(
        name,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )])
}

fn key_line<'a>(keys: &'a str, desc: &'a str, color: Color) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {:<17}", keys), Style::default().fg(color)),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}

pub fn draw_help_screen(frame: &mut Frame, area: Rect) {
    let inner_area = Popup::new("Help - Keyboard Shortcuts", popup::HELP).render(frame, area);

    let help_text = vec![
        Line::from(""),
        section("FORM"),
        key_line("Tab", "Title -> Content -> entry list", Color::Cyan),
        key_line("Up/Down", "Switch field", Color::Cyan),
        key_line("Enter", "Add entry (or save changes while editing)", Color::Green),
        key_line("Esc", "Cancel edit / go to entry list", Color::Red),
        Line::from(""),
        section("ENTRY LIST"),
        key_line("Up/Down, j/k", "Navigate", Color::Cyan),
        key_line("Home/End, g/G", "Jump to top / bottom", Color::Cyan),
        key_line("a, Tab", "Back to the form", Color::Green),
        key_line("e, Enter", "Edit selected entry", Color::Yellow),
        key_line("d, Delete", "Remove selected entry", Color::Red),
        key_line("y / Y", "Copy content / title", Color::Cyan),
        Line::from(""),
        section("FILES"),
        key_line("i", "Import entries from a JSON file", Color::Magenta),
        key_line("x", "Export entries as JSON", Color::Magenta),
        Line::from(""),
        section("OTHER"),
        key_line("?", "Show this help", Color::Blue),
        key_line("q", "Quit", Color::Magenta),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Titles are optional (max 25 chars). Content is required (max 150 chars).",
            Style::default().fg(Color::DarkGray),
        )]),
        Line::from(vec![Span::styled(
            "Export is refused while the JSON is larger than the size limit.",
            Style::default().fg(Color::DarkGray),
        )]),
    ];

    frame.render_widget(Paragraph::new(help_text), inner_area);
}
