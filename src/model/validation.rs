//! Title/Content validation
//!
//! Rules are applied in order and the first failure wins:
//! 1. empty content
//! 2. empty title (only when the policy requires one)
//! 3. title too long
//! 4. content too long

use super::entry::char_len;
use super::error::ValidationError;
use super::policy::EntryPolicy;

/// Validate raw (already trimmed) input against a policy
pub fn validate_entry(
    policy: &EntryPolicy,
    title: &str,
    content: &str,
) -> Result<(), ValidationError> {
    if content.is_empty() {
        return Err(ValidationError::EmptyContent);
    }

    if title.is_empty() {
        if policy.require_title {
            return Err(ValidationError::EmptyTitle);
        }
    } else {
        let len = char_len(title);
        if len > policy.title_max_chars {
            return Err(ValidationError::TitleTooLong {
                len,
                max: policy.title_max_chars,
            });
        }
    }

    let len = char_len(content);
    if len > policy.content_max_chars {
        return Err(ValidationError::ContentTooLong {
            len,
            max: policy.content_max_chars,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> EntryPolicy {
        EntryPolicy::default()
    }

    #[test]
    fn test_valid_entry() {
        assert!(validate_entry(&policy(), "Hi", "Hello world").is_ok());
        assert!(validate_entry(&policy(), "", "No title is fine").is_ok());
    }

    #[test]
    fn test_empty_content_wins_over_long_title() {
        let long_title = "t".repeat(40);
        assert_eq!(
            validate_entry(&policy(), &long_title, ""),
            Err(ValidationError::EmptyContent)
        );
    }

    #[test]
    fn test_title_boundary() {
        let ok = "a".repeat(25);
        let too_long = "a".repeat(26);
        assert!(validate_entry(&policy(), &ok, "x").is_ok());
        assert_eq!(
            validate_entry(&policy(), &too_long, "x"),
            Err(ValidationError::TitleTooLong { len: 26, max: 25 })
        );
    }

    #[test]
    fn test_content_boundary() {
        let ok = "c".repeat(150);
        let too_long = "c".repeat(151);
        assert!(validate_entry(&policy(), "", &ok).is_ok());
        assert_eq!(
            validate_entry(&policy(), "", &too_long),
            Err(ValidationError::ContentTooLong { len: 151, max: 150 })
        );
    }

    #[test]
    fn test_title_too_long_reported_before_content_too_long() {
        let title = "a".repeat(30);
        let content = "c".repeat(200);
        assert!(matches!(
            validate_entry(&policy(), &title, &content),
            Err(ValidationError::TitleTooLong { .. })
        ));
    }

    #[test]
    fn test_require_title_policy() {
        let strict = policy().with_require_title(true);
        assert_eq!(
            validate_entry(&strict, "", "content"),
            Err(ValidationError::EmptyTitle)
        );
        // 内容为空仍然优先
        assert_eq!(
            validate_entry(&strict, "", ""),
            Err(ValidationError::EmptyContent)
        );
        assert!(validate_entry(&strict, "T", "content").is_ok());
    }

    #[test]
    fn test_multibyte_chars_counted_once() {
        let title = "é".repeat(25);
        assert!(validate_entry(&policy(), &title, "x").is_ok());
    }
}
