//! 通用输入框组件
//!
//! 支持激活状态高亮、验证错误显示和 `n/max` 字符计数

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::constants::colors;
use crate::model::FieldCounter;

/// 输入框组件
///
/// ```rust,ignore
/// InputField::new("Title", &app.form.title)
///     .active(true)
///     .counter(app.field_counter(EditingField::Title))
///     .render(frame, area);
/// ```
pub struct InputField<'a> {
    title: &'a str,
    value: &'a str,
    is_active: bool,
    error: Option<&'a str>,
    placeholder: Option<&'a str>,
    counter: Option<FieldCounter>,
}

impl<'a> InputField<'a> {
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            is_active: false,
            error: None,
            placeholder: None,
            counter: None,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// 显示 `Title: n/max` 形式的计数器
    pub fn counter(mut self, counter: FieldCounter) -> Self {
        self.counter = Some(counter);
        self
    }

    fn display_title(&self) -> String {
        let mut title = match &self.counter {
            Some(counter) => counter.label(self.title),
            None => self.title.to_string(),
        };

        if self.value.is_empty()
            && let Some(placeholder) = self.placeholder
        {
            title = format!("{} ({})", title, placeholder);
        }

        title
    }

    fn border_style(&self) -> Style {
        if self.counter.is_some_and(|c| c.is_exceeded()) {
            Style::default().fg(colors::ERROR).bold()
        } else if self.is_active {
            Style::default()
                .fg(colors::HIGHLIGHT_FG)
                .bg(colors::HIGHLIGHT_BG)
                .bold()
        } else {
            Style::default().fg(Color::White)
        }
    }

    /// 渲染输入框，`area` 高度应为 4（输入框 3 行 + 错误 1 行）
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(area);

        let input = Paragraph::new(self.value).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(self.display_title())
                .border_style(self.border_style()),
        );
        frame.render_widget(input, chunks[0]);

        if self.is_active {
            // 光标放在输入末尾（按字符计）
            let offset = self.value.chars().count() as u16;
            let x = (chunks[0].x + 1 + offset).min(chunks[0].right().saturating_sub(2));
            frame.set_cursor_position((x, chunks[0].y + 1));
        }

        if let Some(error) = self.error {
            let error_text = Paragraph::new(error).style(Style::default().fg(colors::ERROR));
            frame.render_widget(error_text, chunks[1]);
        }
    }
}
