//! JSON document file
//!
//! Reads the text of a document for import and writes exported JSON back.
//! The entry list model itself never touches the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::errors::{EntryFormError, Result};
use crate::model::{EntryListModel, encode_compact};

use super::DEFAULT_DOCUMENT_FILE;

/// A JSON document on disk (default [`DEFAULT_DOCUMENT_FILE`])
#[derive(Debug, Clone)]
pub struct DocumentFile {
    path: PathBuf,
}

impl DocumentFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Read the document text, `None` if the file does not exist
    pub fn read(&self) -> Result<Option<String>> {
        if !self.exists() {
            debug!("Document not found: {}", self.display_path());
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            EntryFormError::file_operation(format!(
                "Failed to read '{}': {}",
                self.display_path(),
                e
            ))
        })?;
        Ok(Some(content))
    }

    /// Size of the file on disk in bytes
    pub fn file_size(&self) -> Result<u64> {
        let meta = fs::metadata(&self.path).map_err(|e| {
            EntryFormError::file_operation(format!(
                "Failed to stat '{}': {}",
                self.display_path(),
                e
            ))
        })?;
        Ok(meta.len())
    }

    /// Write `contents`, replacing the file through a sibling temp file
    pub fn write(&self, contents: &str) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.temp_path();
        fs::write(&tmp, contents).map_err(|e| {
            EntryFormError::file_operation(format!(
                "Failed to write '{}': {}",
                tmp.display(),
                e
            ))
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            EntryFormError::file_operation(format!(
                "Failed to replace '{}': {}",
                self.display_path(),
                e
            ))
        })?;

        info!(
            "Wrote {} bytes to {}",
            contents.len(),
            self.display_path()
        );
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_DOCUMENT_FILE.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Import the document into `model` if it exists
    ///
    /// A missing file leaves the model untouched and returns 0.
    pub fn load_into(&self, model: &mut EntryListModel) -> Result<usize> {
        match self.read()? {
            Some(text) => {
                let count = model.import_entries(&text)?;
                info!("Loaded {} entries from {}", count, self.display_path());
                Ok(count)
            }
            None => Ok(0),
        }
    }

    /// Write the working document, whatever its size
    ///
    /// An over-limit list must stay editable, so only `export_from` checks
    /// the size limit.
    pub fn save_from(&self, model: &EntryListModel) -> Result<usize> {
        let json = encode_compact(model.entries());
        self.write(&json)?;
        Ok(json.len())
    }

    /// Export `model` to this file; refused while over the size limit
    pub fn export_from(&self, model: &EntryListModel) -> Result<usize> {
        let json = model.export_json()?;
        self.write(&json)?;
        Ok(json.len())
    }
}
