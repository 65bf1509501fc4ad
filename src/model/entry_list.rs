//! Entry list state machine
//!
//! [`EntryListModel`] owns the ordered entry list and an optional edit
//! session. Collaborators (CLI, TUI) drive it and render what it returns.

use serde_json::Value;
use tracing::{debug, warn};

use super::entry::Entry;
use super::error::{EditError, ExportError, ImportError, IndexError, ValidationError};
use super::metrics::{Metrics, encode_compact};
use super::policy::EntryPolicy;
use super::validation::validate_entry;

#[derive(Debug, Clone, Default)]
pub struct EntryListModel {
    entries: Vec<Entry>,
    policy: EntryPolicy,
    /// Index of the entry currently being edited (None = add mode)
    editing: Option<usize>,
}

impl EntryListModel {
    pub fn new(policy: EntryPolicy) -> Self {
        Self {
            entries: Vec::new(),
            policy,
            editing: None,
        }
    }

    pub fn policy(&self) -> &EntryPolicy {
        &self.policy
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    fn check_index(&self, index: usize) -> Result<(), IndexError> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(IndexError::OutOfRange {
                index,
                len: self.entries.len(),
            })
        }
    }

    pub fn validate_entry(&self, title: &str, content: &str) -> Result<(), ValidationError> {
        validate_entry(&self.policy, title, content)
    }

    /// Append a validated entry and return its index
    pub fn add_entry(&mut self, title: &str, content: &str) -> Result<usize, ValidationError> {
        self.validate_entry(title, content)?;

        let entry = Entry::new(title, content);

        if self.policy.block_add_when_over_limit {
            let size = self.projected_size_with(&entry);
            if size > self.policy.size_limit_bytes {
                debug!("Add rejected: projected size {} bytes", size);
                return Err(ValidationError::SizeLimitExceeded {
                    size,
                    limit: self.policy.size_limit_bytes,
                });
            }
        }

        self.entries.push(entry);
        let index = self.entries.len() - 1;
        debug!("Added entry at index {}", index);
        Ok(index)
    }

    /// Serialized size the list would have after appending `entry`
    pub fn projected_size_with(&self, entry: &Entry) -> usize {
        let current = encode_compact(&self.entries).len();
        let entry_len = encode_compact(std::slice::from_ref(entry))
            .len()
            .saturating_sub(2);
        // 非空数组需要额外的逗号分隔
        let separator = usize::from(!self.entries.is_empty());
        current + entry_len + separator
    }

    /// Replace the entry at `index` in place
    pub fn edit_entry(&mut self, index: usize, title: &str, content: &str) -> Result<(), EditError> {
        self.check_index(index)?;
        self.validate_entry(title, content)?;

        self.entries[index] = Entry::new(title, content);
        debug!("Edited entry at index {}", index);
        Ok(())
    }

    /// Remove the entry at `index`; later entries shift down by one
    pub fn remove_entry(&mut self, index: usize) -> Result<Entry, IndexError> {
        self.check_index(index)?;

        let removed = self.entries.remove(index);
        self.editing = match self.editing {
            Some(current) if current == index => None,
            Some(current) if current > index => Some(current - 1),
            other => other,
        };
        debug!("Removed entry at index {}", index);
        Ok(removed)
    }

    /// Replace the whole list with the contents of a JSON document
    ///
    /// Either every element is accepted and the list is replaced, or the
    /// list is left untouched. Returns the number of imported entries.
    pub fn import_entries(&mut self, raw_json: &str) -> Result<usize, ImportError> {
        let entries = parse_entries(raw_json).inspect_err(|e| {
            warn!("Import rejected: {}", e);
        })?;

        let count = entries.len();
        self.entries = entries;
        self.editing = None;
        debug!("Imported {} entries", count);
        Ok(count)
    }

    pub fn compute_metrics(&self) -> Metrics {
        Metrics::compute(&self.entries, self.policy.size_limit_bytes)
    }

    /// Compact JSON of the list, refused while over the size limit
    pub fn export_json(&self) -> Result<String, ExportError> {
        let json = encode_compact(&self.entries);
        if json.len() > self.policy.size_limit_bytes {
            return Err(ExportError::OverLimit {
                size: json.len(),
                limit: self.policy.size_limit_bytes,
            });
        }
        Ok(json)
    }

    // ========== 编辑会话 ==========

    pub fn editing(&self) -> Option<usize> {
        self.editing
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Enter edit mode for `index` and return the entry to prefill the form
    pub fn begin_edit(&mut self, index: usize) -> Result<&Entry, IndexError> {
        self.check_index(index)?;
        self.editing = Some(index);
        Ok(&self.entries[index])
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Save the active edit session; the session ends only on success
    pub fn save_edit(&mut self, title: &str, content: &str) -> Result<usize, EditError> {
        let index = self.editing.ok_or(EditError::NoActiveEdit)?;
        self.edit_entry(index, title, content)?;
        self.editing = None;
        Ok(index)
    }
}

/// Parse and shape-check an import document without touching any state
pub fn parse_entries(raw_json: &str) -> Result<Vec<Entry>, ImportError> {
    let value: Value =
        serde_json::from_str(raw_json).map_err(|e| ImportError::Malformed(e.to_string()))?;

    let Value::Array(items) = value else {
        return Err(ImportError::NotAnArray);
    };

    items
        .iter()
        .enumerate()
        .map(|(at, item)| {
            let title = item.get("Title").and_then(Value::as_str);
            let content = item.get("Content").and_then(Value::as_str);
            match (title, content) {
                (Some(title), Some(content)) => Ok(Entry::new(title, content)),
                _ => Err(ImportError::InvalidEntry { at }),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> EntryListModel {
        EntryListModel::new(EntryPolicy::default())
    }

    #[test]
    fn test_add_returns_index() {
        let mut m = model();
        assert_eq!(m.add_entry("A", "hello"), Ok(0));
        assert_eq!(m.add_entry("B", "world"), Ok(1));
        assert_eq!(m.len(), 2);
        assert_eq!(m.compute_metrics().total_content_chars, 10);
    }

    #[test]
    fn test_duplicates_allowed() {
        let mut m = model();
        m.add_entry("A", "same").unwrap();
        m.add_entry("A", "same").unwrap();
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn test_add_rejected_leaves_list_unchanged() {
        let mut m = model();
        m.add_entry("A", "hello").unwrap();
        assert_eq!(m.add_entry("B", ""), Err(ValidationError::EmptyContent));
        assert_eq!(m.entries(), &[Entry::new("A", "hello")]);
    }

    #[test]
    fn test_edit_in_place() {
        let mut m = model();
        m.add_entry("A", "one").unwrap();
        m.add_entry("B", "two").unwrap();
        m.edit_entry(0, "A2", "uno").unwrap();
        assert_eq!(m.get(0), Some(&Entry::new("A2", "uno")));
        assert_eq!(m.get(1), Some(&Entry::new("B", "two")));
    }

    #[test]
    fn test_edit_errors() {
        let mut m = model();
        m.add_entry("A", "one").unwrap();
        assert_eq!(
            m.edit_entry(1, "x", "y"),
            Err(EditError::Index(IndexError::OutOfRange { index: 1, len: 1 }))
        );
        assert_eq!(
            m.edit_entry(0, "x", ""),
            Err(EditError::Validation(ValidationError::EmptyContent))
        );
        assert_eq!(m.get(0), Some(&Entry::new("A", "one")));
    }

    #[test]
    fn test_remove_shifts_indices() {
        let mut m = model();
        m.add_entry("A", "one").unwrap();
        m.add_entry("B", "two").unwrap();
        let removed = m.remove_entry(0).unwrap();
        assert_eq!(removed, Entry::new("A", "one"));
        assert_eq!(m.get(0), Some(&Entry::new("B", "two")));
        assert_eq!(
            m.remove_entry(5),
            Err(IndexError::OutOfRange { index: 5, len: 1 })
        );
    }

    #[test]
    fn test_remove_duplicate_only_removes_one() {
        let mut m = model();
        m.add_entry("A", "same").unwrap();
        m.add_entry("A", "same").unwrap();
        m.remove_entry(1).unwrap();
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn test_block_add_when_over_limit() {
        let policy = EntryPolicy::default()
            .with_size_limit(40)
            .with_block_add_when_over_limit(true);
        let mut m = EntryListModel::new(policy);
        // [{"Title":"","Content":"abc"}] = 30 bytes
        assert_eq!(m.add_entry("", "abc"), Ok(0));
        let err = m.add_entry("", "abc").unwrap_err();
        assert_eq!(
            err,
            ValidationError::SizeLimitExceeded {
                size: 59,
                limit: 40
            }
        );
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn test_projected_size_is_exact() {
        let mut m = model();
        let entry = Entry::new("T", "content");
        assert_eq!(
            m.projected_size_with(&entry),
            encode_compact(std::slice::from_ref(&entry)).len()
        );
        m.add_entry("A", "b").unwrap();
        let projected = m.projected_size_with(&entry);
        m.add_entry("T", "content").unwrap();
        assert_eq!(projected, m.compute_metrics().serialized_size);
    }

    #[test]
    fn test_default_policy_does_not_block_add() {
        let mut m = EntryListModel::new(EntryPolicy::default().with_size_limit(10));
        assert!(m.add_entry("", "this is already too big").is_ok());
        assert!(m.compute_metrics().over_limit);
        assert!(matches!(m.export_json(), Err(ExportError::OverLimit { .. })));
    }

    #[test]
    fn test_import_replaces_atomically() {
        let mut m = model();
        m.add_entry("keep", "me").unwrap();

        let bad = r#"[{"Title":"a","Content":"b"},{"Title":1,"Content":"c"}]"#;
        assert_eq!(m.import_entries(bad), Err(ImportError::InvalidEntry { at: 1 }));
        assert_eq!(m.entries(), &[Entry::new("keep", "me")]);

        let good = r#"[{"Title":"a","Content":"b"}]"#;
        assert_eq!(m.import_entries(good), Ok(1));
        assert_eq!(m.entries(), &[Entry::new("a", "b")]);
    }

    #[test]
    fn test_import_error_taxonomy() {
        let mut m = model();
        assert!(matches!(m.import_entries("{oops"), Err(ImportError::Malformed(_))));
        assert_eq!(
            m.import_entries(r#"{"not":"an array"}"#),
            Err(ImportError::NotAnArray)
        );
        assert_eq!(
            m.import_entries(r#"["just a string"]"#),
            Err(ImportError::InvalidEntry { at: 0 })
        );
        assert_eq!(
            m.import_entries(r#"[{"Title":"only title"}]"#),
            Err(ImportError::InvalidEntry { at: 0 })
        );
    }

    #[test]
    fn test_import_ignores_extra_keys() {
        let mut m = model();
        m.import_entries(r#"[{"Title":"a","Content":"b","Extra":true}]"#)
            .unwrap();
        assert_eq!(m.export_json().unwrap(), r#"[{"Title":"a","Content":"b"}]"#);
    }

    #[test]
    fn test_import_empty_array() {
        let mut m = model();
        m.add_entry("A", "x").unwrap();
        assert_eq!(m.import_entries("[]"), Ok(0));
        assert!(m.is_empty());
    }

    #[test]
    fn test_edit_session_flow() {
        let mut m = model();
        m.add_entry("A", "one").unwrap();
        m.add_entry("B", "two").unwrap();

        assert!(!m.is_editing());
        let entry = m.begin_edit(1).unwrap().clone();
        assert_eq!(entry, Entry::new("B", "two"));
        assert_eq!(m.editing(), Some(1));

        // 校验失败时保持编辑状态
        assert!(m.save_edit("B", "").is_err());
        assert_eq!(m.editing(), Some(1));

        assert_eq!(m.save_edit("B2", "deux"), Ok(1));
        assert_eq!(m.editing(), None);
        assert_eq!(m.get(1), Some(&Entry::new("B2", "deux")));
    }

    #[test]
    fn test_save_without_session() {
        let mut m = model();
        assert_eq!(m.save_edit("a", "b"), Err(EditError::NoActiveEdit));
    }

    #[test]
    fn test_cancel_edit() {
        let mut m = model();
        m.add_entry("A", "one").unwrap();
        m.begin_edit(0).unwrap();
        m.cancel_edit();
        assert!(!m.is_editing());
        assert!(m.begin_edit(3).is_err());
        assert!(!m.is_editing());
    }

    #[test]
    fn test_remove_adjusts_edit_session() {
        let mut m = model();
        for c in ["a", "b", "c"] {
            m.add_entry("", c).unwrap();
        }
        m.begin_edit(2).unwrap();
        m.remove_entry(0).unwrap();
        assert_eq!(m.editing(), Some(1));
        m.remove_entry(1).unwrap();
        assert_eq!(m.editing(), None);
    }

    #[test]
    fn test_import_cancels_edit_session() {
        let mut m = model();
        m.add_entry("", "a").unwrap();
        m.begin_edit(0).unwrap();
        m.import_entries("[]").unwrap();
        assert!(!m.is_editing());
    }
}
