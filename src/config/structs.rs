use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumMessage, IntoEnumIterator};

use crate::errors::{EntryFormError, Result};
use crate::model::{
    DEFAULT_CONTENT_MAX_CHARS, DEFAULT_SIZE_LIMIT_BYTES, DEFAULT_TITLE_MAX_CHARS, EntryPolicy,
};

use super::validators::validate_config;
use crate::storage::DEFAULT_DOCUMENT_FILE;

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "entryform.toml";

/// 环境变量前缀，示例：EF__EDITOR__SIZE_LIMIT_BYTES=4096
pub const ENV_PREFIX: &str = "EF";

/// 应用配置（从 TOML 和环境变量加载）
///
/// - editor: 字段长度限制、大小上限、策略开关、默认数据文件
/// - logging: 日志级别、格式、输出文件
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > 配置文件 > 默认值。
    /// 显式传入的路径必须存在；默认路径缺失时使用默认值。
    pub fn load(path: Option<&str>) -> Result<Self> {
        use config::{Config, Environment, File};

        let (path, required) = match path {
            Some(p) => (p, true),
            None => (DEFAULT_CONFIG_PATH, false),
        };

        let settings = Config::builder()
            // 1. 从 TOML 文件加载
            .add_source(File::with_name(path).required(required))
            // 2. 从环境变量覆盖，前缀 EF，分隔符 __
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        validate_config(&config).map_err(EntryFormError::config)?;
        Ok(config)
    }

    /// 生成示例 TOML 配置
    pub fn generate_sample_config() -> Result<String> {
        Ok(toml::to_string_pretty(&Self::default())?)
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 编辑器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default = "default_title_max_chars")]
    pub title_max_chars: usize,
    #[serde(default = "default_content_max_chars")]
    pub content_max_chars: usize,
    #[serde(default = "default_size_limit_bytes")]
    pub size_limit_bytes: usize,
    #[serde(default)]
    pub require_title: bool,
    #[serde(default)]
    pub block_add_when_over_limit: bool,
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_warning_display_secs")]
    pub warning_display_secs: u64,
}

impl EditorConfig {
    pub fn policy(&self) -> EntryPolicy {
        EntryPolicy {
            title_max_chars: self.title_max_chars,
            content_max_chars: self.content_max_chars,
            size_limit_bytes: self.size_limit_bytes,
            require_title: self.require_title,
            block_add_when_over_limit: self.block_add_when_over_limit,
        }
    }
}

/// 日志输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, AsRefStr, EnumMessage)]
#[strum(serialize_all = "lowercase")]
pub enum LogFormat {
    #[default]
    #[strum(message = "Human readable single-line records")]
    Text,
    #[strum(message = "One JSON object per record")]
    Json,
}

impl LogFormat {
    /// 所有合法取值，逗号分隔
    pub fn valid_values() -> String {
        Self::iter()
            .map(|v| v.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::str::FromStr for LogFormat {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::iter()
            .find(|v| v.as_ref().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "Invalid logging.format: '{}'. Valid: {}",
                    s,
                    Self::valid_values()
                )
            })
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
}

impl LoggingConfig {
    /// 解析后的日志格式，未知取值回退为 text（加载时已校验）
    pub fn log_format(&self) -> LogFormat {
        self.format.parse().unwrap_or_default()
    }
}

// ============================================================
// Default value functions
// ============================================================

fn default_title_max_chars() -> usize {
    DEFAULT_TITLE_MAX_CHARS
}

fn default_content_max_chars() -> usize {
    DEFAULT_CONTENT_MAX_CHARS
}

fn default_size_limit_bytes() -> usize {
    DEFAULT_SIZE_LIMIT_BYTES
}

fn default_data_file() -> String {
    DEFAULT_DOCUMENT_FILE.to_string()
}

fn default_warning_display_secs() -> u64 {
    5
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    LogFormat::default().as_ref().to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            title_max_chars: default_title_max_chars(),
            content_max_chars: default_content_max_chars(),
            size_limit_bytes: default_size_limit_bytes(),
            require_title: false,
            block_add_when_over_limit: false,
            data_file: default_data_file(),
            warning_display_secs: default_warning_display_secs(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}
