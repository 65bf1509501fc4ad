use std::fmt;

use crate::model::{EditError, ExportError, ImportError, IndexError, ValidationError};

#[derive(Debug, Clone)]
pub enum EntryFormError {
    Validation(String),
    NotFound(String),
    Import(String),
    SizeLimit(String),
    FileOperation(String),
    Serialization(String),
    Config(String),
    NoActiveEdit(String),
}

impl EntryFormError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            EntryFormError::Validation(_) => "E001",
            EntryFormError::NotFound(_) => "E002",
            EntryFormError::Import(_) => "E003",
            EntryFormError::SizeLimit(_) => "E004",
            EntryFormError::FileOperation(_) => "E005",
            EntryFormError::Serialization(_) => "E006",
            EntryFormError::Config(_) => "E007",
            EntryFormError::NoActiveEdit(_) => "E008",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            EntryFormError::Validation(_) => "Validation Error",
            EntryFormError::NotFound(_) => "Entry Not Found",
            EntryFormError::Import(_) => "Import Error",
            EntryFormError::SizeLimit(_) => "Size Limit Exceeded",
            EntryFormError::FileOperation(_) => "File Operation Error",
            EntryFormError::Serialization(_) => "Serialization Error",
            EntryFormError::Config(_) => "Configuration Error",
            EntryFormError::NoActiveEdit(_) => "No Active Edit",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            EntryFormError::Validation(msg)
            | EntryFormError::NotFound(msg)
            | EntryFormError::Import(msg)
            | EntryFormError::SizeLimit(msg)
            | EntryFormError::FileOperation(msg)
            | EntryFormError::Serialization(msg)
            | EntryFormError::Config(msg)
            | EntryFormError::NoActiveEdit(msg) => msg,
        }
    }

    /// 格式化为彩色输出
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 TUI 状态栏）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for EntryFormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for EntryFormError {}

// 便捷的构造函数
impl EntryFormError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        EntryFormError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        EntryFormError::NotFound(msg.into())
    }

    pub fn import<T: Into<String>>(msg: T) -> Self {
        EntryFormError::Import(msg.into())
    }

    pub fn size_limit<T: Into<String>>(msg: T) -> Self {
        EntryFormError::SizeLimit(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        EntryFormError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        EntryFormError::Serialization(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        EntryFormError::Config(msg.into())
    }
}

impl From<ValidationError> for EntryFormError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::SizeLimitExceeded { .. } => EntryFormError::size_limit(err.to_string()),
            _ => EntryFormError::validation(err.to_string()),
        }
    }
}

impl From<IndexError> for EntryFormError {
    fn from(err: IndexError) -> Self {
        EntryFormError::not_found(err.to_string())
    }
}

impl From<EditError> for EntryFormError {
    fn from(err: EditError) -> Self {
        match err {
            EditError::Index(e) => e.into(),
            EditError::Validation(e) => e.into(),
            EditError::NoActiveEdit => EntryFormError::NoActiveEdit(err.to_string()),
        }
    }
}

impl From<ImportError> for EntryFormError {
    fn from(err: ImportError) -> Self {
        EntryFormError::import(err.to_string())
    }
}

impl From<ExportError> for EntryFormError {
    fn from(err: ExportError) -> Self {
        EntryFormError::size_limit(err.to_string())
    }
}

impl From<std::io::Error> for EntryFormError {
    fn from(err: std::io::Error) -> Self {
        EntryFormError::file_operation(err.to_string())
    }
}

impl From<serde_json::Error> for EntryFormError {
    fn from(err: serde_json::Error) -> Self {
        EntryFormError::serialization(err.to_string())
    }
}

impl From<config::ConfigError> for EntryFormError {
    fn from(err: config::ConfigError) -> Self {
        EntryFormError::config(err.to_string())
    }
}

impl From<toml::ser::Error> for EntryFormError {
    fn from(err: toml::ser::Error) -> Self {
        EntryFormError::serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EntryFormError>;
