//! Entry data structure
//!
//! The wire form uses capitalized `Title` / `Content` keys.

use serde::{Deserialize, Serialize};

/// A single Title/Content pair
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Content")]
    pub content: String,
}

impl Entry {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// 标题字符数（按 Unicode 标量值计数）
    pub fn title_len(&self) -> usize {
        char_len(&self.title)
    }

    /// 内容字符数（按 Unicode 标量值计数）
    pub fn content_len(&self) -> usize {
        char_len(&self.content)
    }
}

/// Character length used by every limit check
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_serializes_with_capitalized_keys() {
        let entry = Entry::new("Hi", "Hello world");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"Title":"Hi","Content":"Hello world"}"#);
    }

    #[test]
    fn test_lengths_count_chars_not_bytes() {
        let entry = Entry::new("héllo", "日本語");
        assert_eq!(entry.title_len(), 5);
        assert_eq!(entry.content_len(), 3);
        assert_eq!(char_len(""), 0);
    }
}
