//! File import/export operations

use tracing::info;

use super::state::App;
use crate::errors::EntryFormError;
use crate::storage::{DEFAULT_DOCUMENT_FILE, DocumentFile};

impl App {
    /// Import entries from the path typed by the user
    pub fn import_from_path(&mut self) -> Result<usize, EntryFormError> {
        let path = self.import_path_input.trim().to_string();
        if path.is_empty() {
            return Err(EntryFormError::validation("No file selected"));
        }

        let text = DocumentFile::new(&path)
            .read()?
            .ok_or_else(|| EntryFormError::file_operation(format!("File not found: {}", path)))?;
        let count = self.model.import_entries(&text)?;

        // Import ends any edit session
        self.form.clear();
        self.selected_index = 0;
        self.dirty = false;
        self.refresh_metrics();
        info!("Imported {} entries from {}", count, path);
        Ok(count)
    }

    /// Resolved export file name (default when the input is blank)
    pub fn export_target(&self) -> String {
        let name = self.export_filename_input.trim();
        if name.is_empty() {
            DEFAULT_DOCUMENT_FILE.to_string()
        } else {
            name.to_string()
        }
    }

    /// Export entries to the file name typed by the user; refused over limit
    pub fn export_to_file(&mut self) -> Result<String, EntryFormError> {
        let target = self.export_target();
        DocumentFile::new(&target).export_from(&self.model)?;
        self.dirty = false;
        Ok(target)
    }
}
