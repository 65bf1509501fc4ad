//! Entry add/edit/remove operations

use tracing::debug;

use super::state::{App, EditingField};
use crate::model::EditError;

impl App {
    /// Add a new entry, or save the entry being edited
    ///
    /// Returns true when the form was accepted.
    pub fn submit_form(&mut self) -> bool {
        let title = self.form.title.trim().to_string();
        let content = self.form.content.trim().to_string();
        self.form.clear_errors();

        let result = if self.model.is_editing() {
            self.model
                .save_edit(&title, &content)
                .map(|index| format!("Entry #{} updated", index))
        } else {
            self.model
                .add_entry(&title, &content)
                .map(|index| {
                    self.selected_index = index;
                    format!("Entry #{} added", index)
                })
                .map_err(EditError::from)
        };

        match result {
            Ok(message) => {
                self.form.clear();
                self.focus_form(EditingField::Title);
                self.dirty = true;
                self.refresh_metrics();
                self.set_status(message);
                // Over-limit warning takes precedence over the success message
                self.warn_if_over_limit();
                true
            }
            Err(EditError::Validation(e)) => {
                self.show_validation_error(&e);
                false
            }
            Err(e) => {
                self.set_error(e.to_string());
                false
            }
        }
    }

    /// Enter edit mode for the selected entry and prefill the form
    pub fn begin_edit_selected(&mut self) {
        match self.model.begin_edit(self.selected_index) {
            Ok(entry) => {
                let entry = entry.clone();
                self.form.fill(&entry);
                self.focus_form(EditingField::Title);
                debug!("Editing entry {}", self.selected_index);
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    /// Leave edit mode without saving
    pub fn cancel_edit(&mut self) {
        if self.model.is_editing() {
            self.model.cancel_edit();
            self.form.clear();
            self.set_status("Edit cancelled".to_string());
        }
    }

    pub fn delete_selected_entry(&mut self) {
        let was_editing = self.model.editing();
        match self.model.remove_entry(self.selected_index) {
            Ok(removed) => {
                // Removing the entry under edit ends the session
                if was_editing.is_some() && !self.model.is_editing() {
                    self.form.clear();
                }
                self.dirty = true;
                self.refresh_metrics();
                self.set_status(format!("Removed entry: {}", removed.content));
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    /// Copy the selected entry's content (or title) to the clipboard
    pub fn copy_selected(&mut self, title: bool) {
        let Some(entry) = self.get_selected_entry() else {
            return;
        };
        let text = if title {
            entry.title.clone()
        } else {
            entry.content.clone()
        };

        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
            Ok(()) => self.set_status(format!(
                "Copied {} to clipboard",
                if title { "title" } else { "content" }
            )),
            Err(e) => self.set_error(format!("Clipboard unavailable: {}", e)),
        }
    }
}
