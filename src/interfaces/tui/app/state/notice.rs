//! 状态栏提示（自动消失）

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

/// A transient message shown in the status bar
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub shown_at: Instant,
}

impl Notice {
    pub fn new(kind: NoticeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.shown_at) >= ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_expiry() {
        let notice = Notice::new(NoticeKind::Warning, "over");
        let ttl = Duration::from_secs(5);
        assert!(!notice.is_expired(notice.shown_at, ttl));
        assert!(!notice.is_expired(notice.shown_at + Duration::from_secs(4), ttl));
        assert!(notice.is_expired(notice.shown_at + ttl, ttl));
    }
}
