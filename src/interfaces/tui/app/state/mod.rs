//! App state definition and basic state management
//!
//! 包含核心 App 结构和基础状态管理，以及拆分后的子状态模块

mod form_state;
mod notice;

pub use form_state::{EditingField, FormState};
pub use notice::{Notice, NoticeKind};

use std::time::{Duration, Instant};

use ratatui::widgets::TableState;

use crate::config::AppConfig;
use crate::model::{Entry, EntryListModel, Metrics};
use crate::storage::DocumentFile;

/// 当前屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Main,
    DeleteConfirm,
    ImportPath,
    ExportFileName,
    Help,
    Exiting,
}

pub struct App {
    pub model: EntryListModel,
    pub document: DocumentFile,
    pub current_screen: CurrentScreen,

    // Form state for add/edit
    pub form: FormState,

    // Cached after every mutation
    pub metrics: Metrics,

    // UI state
    pub selected_index: usize,
    pub table_state: TableState,
    pub notice: Option<Notice>,
    pub notice_ttl: Duration,

    // Import/Export
    pub import_path_input: String,
    pub export_filename_input: String,

    /// Entries changed since the last import/export
    pub dirty: bool,
}

impl App {
    pub fn new(config: &AppConfig, model: EntryListModel, document: DocumentFile) -> App {
        let metrics = model.compute_metrics();
        let mut table_state = TableState::default();
        if !model.is_empty() {
            table_state.select(Some(0));
        }
        let export_filename_input = document.display_path();

        let mut app = App {
            model,
            document,
            current_screen: CurrentScreen::Main,
            form: FormState::new(),
            metrics,
            selected_index: 0,
            table_state,
            notice: None,
            notice_ttl: Duration::from_secs(config.editor.warning_display_secs),
            import_path_input: String::new(),
            export_filename_input,
            dirty: false,
        };
        // 启动时焦点在标题输入框
        app.form.currently_editing = Some(EditingField::Title);
        app.warn_if_over_limit();
        app
    }

    /// 焦点是否在表单上（否则在条目表格上）
    pub fn form_focused(&self) -> bool {
        self.form.currently_editing.is_some()
    }

    pub fn focus_form(&mut self, field: EditingField) {
        self.form.currently_editing = Some(field);
    }

    pub fn focus_table(&mut self) {
        self.form.currently_editing = None;
    }

    pub fn toggle_editing(&mut self) {
        self.form.currently_editing = match self.form.currently_editing {
            Some(EditingField::Title) => Some(EditingField::Content),
            // Tab from the last field moves to the table
            Some(EditingField::Content) => None,
            None => Some(EditingField::Title),
        };
    }

    pub fn get_selected_entry(&self) -> Option<&Entry> {
        self.model.get(self.selected_index)
    }

    pub fn set_status(&mut self, message: String) {
        self.notice = Some(Notice::new(NoticeKind::Success, message));
    }

    pub fn set_warning(&mut self, message: String) {
        self.notice = Some(Notice::new(NoticeKind::Warning, message));
    }

    pub fn set_error(&mut self, message: String) {
        self.notice = Some(Notice::new(NoticeKind::Error, message));
    }

    /// Recompute metrics after the entry list changed
    pub fn refresh_metrics(&mut self) {
        self.metrics = self.model.compute_metrics();
        self.clamp_selection();
    }

    /// Show the size warning while the list is over the limit
    pub fn warn_if_over_limit(&mut self) {
        if let Some(warning) = self.metrics.warning() {
            self.set_warning(warning);
        }
    }

    /// Drop the notice once it has been visible long enough
    pub fn tick(&mut self, now: Instant) {
        if let Some(notice) = &self.notice
            && notice.is_expired(now, self.notice_ttl)
        {
            self.notice = None;
        }
    }
}
