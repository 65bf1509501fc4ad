//! Per-operation error types of the entry list model
//!
//! Every error is returned as a value. A rejected operation never leaves the
//! entry list in a partially modified state.

use std::fmt;

/// Rejected Title/Content input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyContent,
    /// Only produced when the policy requires a title
    EmptyTitle,
    TitleTooLong { len: usize, max: usize },
    ContentTooLong { len: usize, max: usize },
    /// Only produced when the policy blocks adds over the size limit
    SizeLimitExceeded { size: usize, limit: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyContent => write!(f, "Content must not be empty"),
            ValidationError::EmptyTitle => write!(f, "Please fill in both Title and Content"),
            ValidationError::TitleTooLong { len, max } => write!(
                f,
                "Title exceeds the maximum length of {} characters ({} given)",
                max, len
            ),
            ValidationError::ContentTooLong { len, max } => write!(
                f,
                "Content exceeds the maximum length of {} characters ({} given)",
                max, len
            ),
            ValidationError::SizeLimitExceeded { size, limit } => write!(
                f,
                "Adding this entry would grow the JSON to {} bytes (limit {} bytes)",
                size, limit
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Index outside the current entry list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    OutOfRange { index: usize, len: usize },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::OutOfRange { index, len } => {
                write!(f, "Entry index {} is out of range (0..{})", index, len)
            }
        }
    }
}

impl std::error::Error for IndexError {}

/// Failure of an edit: either the index or the new values were rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    Index(IndexError),
    Validation(ValidationError),
    /// `save_edit` called while no entry is being edited
    NoActiveEdit,
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditError::Index(e) => write!(f, "{}", e),
            EditError::Validation(e) => write!(f, "{}", e),
            EditError::NoActiveEdit => write!(f, "No entry is being edited"),
        }
    }
}

impl std::error::Error for EditError {}

impl From<IndexError> for EditError {
    fn from(err: IndexError) -> Self {
        EditError::Index(err)
    }
}

impl From<ValidationError> for EditError {
    fn from(err: ValidationError) -> Self {
        EditError::Validation(err)
    }
}

/// Rejected import document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// The text is not JSON at all
    Malformed(String),
    /// Valid JSON whose top-level value is not an array
    NotAnArray,
    /// Element `at` lacks a string `Title` or `Content`
    InvalidEntry { at: usize },
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::Malformed(msg) => write!(f, "Error parsing JSON document: {}", msg),
            ImportError::NotAnArray => write!(f, "Invalid JSON format. Expected an array"),
            ImportError::InvalidEntry { at } => write!(
                f,
                "Invalid data format at element {}. Each entry must have a Title and Content as strings",
                at
            ),
        }
    }
}

impl std::error::Error for ImportError {}

/// Rejected export
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    OverLimit { size: usize, limit: usize },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::OverLimit { size, limit } => write!(
                f,
                "Cannot export: JSON size exceeds the {} limit. Current size: {}",
                super::metrics::format_kb(*limit),
                super::metrics::format_kb(*size)
            ),
        }
    }
}

impl std::error::Error for ExportError {}
