//! Navigation and selection logic

use super::state::App;
use crate::interfaces::tui::constants::PAGE_SCROLL_STEP;

impl App {
    pub fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
        self.sync_table_state();
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.model.len() {
            self.selected_index += 1;
        }
        self.sync_table_state();
    }

    pub fn jump_to_top(&mut self) {
        self.selected_index = 0;
        self.sync_table_state();
    }

    pub fn jump_to_bottom(&mut self) {
        self.selected_index = self.model.len().saturating_sub(1);
        self.sync_table_state();
    }

    pub fn page_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(PAGE_SCROLL_STEP);
        self.sync_table_state();
    }

    pub fn page_down(&mut self) {
        let max_index = self.model.len().saturating_sub(1);
        self.selected_index = (self.selected_index + PAGE_SCROLL_STEP).min(max_index);
        self.sync_table_state();
    }

    /// Keep the selection inside the list after it shrank
    pub fn clamp_selection(&mut self) {
        let len = self.model.len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
        self.sync_table_state();
    }

    fn sync_table_state(&mut self) {
        if self.model.is_empty() {
            self.table_state.select(None);
        } else {
            self.table_state.select(Some(self.selected_index));
        }
    }
}
