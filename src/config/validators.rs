//! 配置值验证模块

use super::{AppConfig, LogFormat};

/// 验证配置是否合法
///
/// - 所有上限必须大于 0
/// - 单个字段的上限不能超过整体大小上限
/// - 日志格式只支持 text / json
pub fn validate_config(config: &AppConfig) -> Result<(), String> {
    let editor = &config.editor;

    for (name, value) in [
        ("editor.title_max_chars", editor.title_max_chars),
        ("editor.content_max_chars", editor.content_max_chars),
        ("editor.size_limit_bytes", editor.size_limit_bytes),
    ] {
        if value == 0 {
            return Err(format!("{} must be greater than 0", name));
        }
    }

    if editor.title_max_chars > editor.size_limit_bytes
        || editor.content_max_chars > editor.size_limit_bytes
    {
        return Err(format!(
            "Field limits ({} / {}) must not exceed editor.size_limit_bytes ({})",
            editor.title_max_chars, editor.content_max_chars, editor.size_limit_bytes
        ));
    }

    if editor.data_file.trim().is_empty() {
        return Err("editor.data_file must not be empty".to_string());
    }

    config.logging.format.parse::<LogFormat>().map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_limit_rejected() {
        let mut config = AppConfig::default();
        config.editor.size_limit_bytes = 0;
        let err = validate_config(&config).unwrap_err();
        assert!(err.contains("size_limit_bytes"));
    }

    #[test]
    fn test_field_limit_above_size_limit_rejected() {
        let mut config = AppConfig::default();
        config.editor.size_limit_bytes = 100;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        let mut config = AppConfig::default();
        config.logging.format = "yaml".to_string();
        assert!(validate_config(&config).is_err());
    }
}
