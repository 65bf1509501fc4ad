//! Validation policy
//!
//! Limits and opt-in rules that vary between editor configurations.

/// 标题最大字符数
pub const DEFAULT_TITLE_MAX_CHARS: usize = 25;

/// 内容最大字符数
pub const DEFAULT_CONTENT_MAX_CHARS: usize = 150;

/// 导出 JSON 的字节上限（5 KB）
pub const DEFAULT_SIZE_LIMIT_BYTES: usize = 5120;

/// Rules applied by [`crate::model::EntryListModel`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryPolicy {
    pub title_max_chars: usize,
    pub content_max_chars: usize,
    pub size_limit_bytes: usize,
    /// Reject entries with an empty title
    pub require_title: bool,
    /// Reject adds that would push the serialized list over the size limit
    pub block_add_when_over_limit: bool,
}

impl Default for EntryPolicy {
    fn default() -> Self {
        Self {
            title_max_chars: DEFAULT_TITLE_MAX_CHARS,
            content_max_chars: DEFAULT_CONTENT_MAX_CHARS,
            size_limit_bytes: DEFAULT_SIZE_LIMIT_BYTES,
            require_title: false,
            block_add_when_over_limit: false,
        }
    }
}

impl EntryPolicy {
    pub fn with_require_title(mut self, require: bool) -> Self {
        self.require_title = require;
        self
    }

    pub fn with_block_add_when_over_limit(mut self, block: bool) -> Self {
        self.block_add_when_over_limit = block;
        self
    }

    pub fn with_size_limit(mut self, bytes: usize) -> Self {
        self.size_limit_bytes = bytes;
        self
    }
}
