use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::{App, CurrentScreen, NoticeKind};
use crate::interfaces::tui::constants::colors;
use crate::model::format_kb;

/// Draw title bar with version and document info
pub fn draw_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled("entryform", Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!(" v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.document.display_path(),
            Style::default().fg(Color::White),
        ),
    ];
    if app.dirty {
        spans.push(Span::styled(" [modified]", Style::default().fg(Color::Yellow)));
    }

    let title = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw status bar: totals on the left, transient notice on the right
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let metrics = &app.metrics;
    let size_style = if metrics.over_limit {
        Style::default().fg(colors::ERROR).bold()
    } else {
        Style::default().fg(colors::SUCCESS)
    };

    let mut spans = vec![
        Span::styled("Total Content Characters: ", Style::default().fg(Color::Gray)),
        Span::styled(
            metrics.total_content_chars.to_string(),
            Style::default().fg(Color::White).bold(),
        ),
        Span::styled("  |  JSON Size: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!(
                "{} / {}",
                format_kb(metrics.serialized_size),
                format_kb(metrics.size_limit)
            ),
            size_style,
        ),
    ];

    if let Some(notice) = &app.notice {
        let (label, style) = match notice.kind {
            NoticeKind::Success => (
                "[OK]",
                Style::default().fg(Color::Black).bg(colors::SUCCESS).bold(),
            ),
            NoticeKind::Warning => (
                "[WARNING]",
                Style::default().fg(Color::Black).bg(colors::WARNING).bold(),
            ),
            NoticeKind::Error => (
                "[ERROR]",
                Style::default().fg(Color::White).bg(colors::ERROR).bold(),
            ),
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(format!("{} {}", label, notice.text), style));
    }

    let status = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(status, area);
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = match app.current_screen {
        CurrentScreen::Main if app.form_focused() => {
            let save = if app.model.is_editing() {
                "Save Changes"
            } else {
                "Add Entry"
            };
            vec![
                ("Tab", "Next Field", Color::Cyan),
                ("Enter", save, Color::Green),
                ("Esc", "Cancel / List", Color::Red),
            ]
        }
        CurrentScreen::Main => vec![
            ("Up/Down", "Navigate", Color::Cyan),
            ("a", "Add", Color::Green),
            ("e", "Edit", Color::Yellow),
            ("d", "Remove", Color::Red),
            ("y", "Copy", Color::Cyan),
            ("i", "Import", Color::Magenta),
            ("x", "Export", Color::Magenta),
            ("?", "Help", Color::Blue),
            ("q", "Quit", Color::Magenta),
        ],
        CurrentScreen::DeleteConfirm | CurrentScreen::Exiting => {
            vec![("y", "Yes", Color::Green), ("n", "No", Color::Red)]
        }
        CurrentScreen::ImportPath | CurrentScreen::ExportFileName => vec![
            ("Enter", "Confirm", Color::Green),
            ("Esc", "Cancel", Color::Red),
        ],
        CurrentScreen::Help => vec![("q/Esc", "Close", Color::Red)],
    };

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(ratatui::layout::Alignment::Center);

    frame.render_widget(footer, area);
}
