use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table},
};

use super::widgets::InputField;
use crate::interfaces::tui::app::{App, EditingField};
use crate::interfaces::tui::constants::CONTENT_TRUNCATE_LENGTH;

/// Entry form on top, entries table below
pub fn draw_main_screen(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10), // Form
            Constraint::Min(5),     // Table
        ])
        .split(area);

    draw_entry_form(frame, app, chunks[0]);
    draw_entry_table(frame, app, chunks[1]);
}

fn draw_entry_form(frame: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.model.editing() {
        Some(index) => (format!("Edit Entry #{}", index), Color::Yellow),
        None => ("Add Entry".to_string(), Color::Green),
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(color).bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if app.has_validation_errors() {
            Color::Red
        } else if app.form_focused() {
            color
        } else {
            Color::DarkGray
        }));
    frame.render_widget(block, area);

    let inner = area.inner(Margin::new(1, 1));
    let fields = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Length(4)])
        .split(inner);

    let editing = app.form.currently_editing;
    let title_error = app.form.get_error(EditingField::Title).map(String::as_str);
    let content_error = app.form.get_error(EditingField::Content).map(String::as_str);

    InputField::new("Title", &app.form.title)
        .active(editing == Some(EditingField::Title))
        .counter(app.field_counter(EditingField::Title))
        .placeholder(title_placeholder(app.model.policy().require_title))
        .error(title_error)
        .render(frame, fields[0]);

    InputField::new("Content", &app.form.content)
        .active(editing == Some(EditingField::Content))
        .counter(app.field_counter(EditingField::Content))
        .error(content_error)
        .render(frame, fields[1]);
}

fn draw_entry_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let border_color = if app.form_focused() {
        Color::DarkGray
    } else {
        Color::Cyan
    };

    if app.model.is_empty() {
        let empty_text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "No entries yet",
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Type a title and content above, then press ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    "[Enter]",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        let empty = Paragraph::new(empty_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(border_color))
                    .title("Entries")
                    .title_style(Style::default().fg(Color::Cyan)),
            )
            .alignment(ratatui::layout::Alignment::Center);

        frame.render_widget(empty, area);
        return;
    }

    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Span::styled("#", header_style),
        Span::styled("Title", header_style),
        Span::styled("Content", header_style),
        Span::styled("Title Len", header_style),
        Span::styled("Content Len", header_style),
    ])
    .bottom_margin(1);

    let editing = app.model.editing();
    let rows: Vec<Row> = app
        .model
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let index_style = if editing == Some(i) {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Row::new(vec![
                Span::styled(i.to_string(), index_style),
                Span::styled(
                    entry.title.clone(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    truncate(&entry.content, CONTENT_TRUNCATE_LENGTH),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    entry.title_len().to_string(),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    entry.content_len().to_string(),
                    Style::default().fg(Color::Green),
                ),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),  // Index
            Constraint::Length(26), // Title
            Constraint::Min(20),    // Content
            Constraint::Length(10), // Title length
            Constraint::Length(12), // Content length
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title(format!("Entries ({})", app.model.len()))
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
    )
    .row_highlight_style(Style::default().bg(Color::DarkGray).fg(Color::White))
    .highlight_symbol("▶ ")
    .column_spacing(1);

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

/// Truncate to `max` characters, never splitting a multi-byte character
fn title_placeholder(require_title: bool) -> &'static str {
    if require_title { "required" } else { "optional" }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}
