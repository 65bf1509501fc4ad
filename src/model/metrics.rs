//! Derived metrics and display helpers

use serde::Serialize;
use tracing::error;

use super::entry::{Entry, char_len};

/// Aggregate figures for the current entry list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Metrics {
    /// Sum of content character counts
    pub total_content_chars: usize,
    /// Byte length of the compact JSON encoding
    pub serialized_size: usize,
    pub size_limit: usize,
    pub over_limit: bool,
}

impl Metrics {
    pub fn compute(entries: &[Entry], size_limit: usize) -> Self {
        let total_content_chars = entries.iter().map(Entry::content_len).sum();
        let serialized_size = encode_compact(entries).len();
        Self {
            total_content_chars,
            serialized_size,
            size_limit,
            over_limit: serialized_size > size_limit,
        }
    }

    /// Remaining bytes before the limit is hit (0 when over)
    pub fn remaining(&self) -> usize {
        self.size_limit.saturating_sub(self.serialized_size)
    }

    /// Warning shown while the list is over the limit
    pub fn warning(&self) -> Option<String> {
        self.over_limit.then(|| {
            format!(
                "JSON size exceeds the {} limit. Current size: {}.",
                format_kb(self.size_limit),
                format_kb(self.serialized_size)
            )
        })
    }
}

/// Compact JSON encoding of an entry list
pub fn encode_compact(entries: &[Entry]) -> String {
    // 只包含字符串字段，实际不会失败；失败时退回到合法的空数组
    serde_json::to_string(entries).unwrap_or_else(|e| {
        error!("Failed to encode entries: {}", e);
        "[]".to_string()
    })
}

/// Format a byte count as KB with two decimals (1 KB = 1024 bytes)
pub fn format_kb(bytes: usize) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

/// Live character counter for an in-progress input field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCounter {
    pub used: usize,
    pub max: usize,
}

impl FieldCounter {
    pub fn new(value: &str, max: usize) -> Self {
        Self {
            used: char_len(value),
            max,
        }
    }

    pub fn is_exceeded(&self) -> bool {
        self.used > self.max
    }

    /// e.g. `Title: 3/25`
    pub fn label(&self, name: &str) -> String {
        format!("{}: {}/{}", name, self.used, self.max)
    }
}
