//! 表单状态管理
//!
//! 管理添加/编辑条目时的 Title / Content 输入和验证错误

use std::collections::HashMap;

use crate::model::Entry;

/// 当前正在编辑的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditingField {
    #[default]
    Title,
    Content,
}

impl EditingField {
    const ALL: [Self; 2] = [Self::Title, Self::Content];

    /// 切换到下一个字段
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|x| x == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// 切换到上一个字段
    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|x| x == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// 验证错误的 key
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Content => "content",
        }
    }

    /// 字段显示名称（计数器前缀）
    pub fn display_title(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Content => "Content",
        }
    }
}

/// 表单状态
#[derive(Debug, Default)]
pub struct FormState {
    pub title: String,
    pub content: String,
    /// 验证错误 (field_name -> error_message)
    pub validation_errors: HashMap<String, String>,
    /// 当前编辑的字段，None 表示焦点不在表单上
    pub currently_editing: Option<EditingField>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 清空输入，焦点保持不变
    pub fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
        self.validation_errors.clear();
    }

    /// 用已有条目预填表单（进入编辑模式时）
    pub fn fill(&mut self, entry: &Entry) {
        self.title = entry.title.clone();
        self.content = entry.content.clone();
        self.validation_errors.clear();
    }

    pub fn value(&self, field: EditingField) -> &str {
        match field {
            EditingField::Title => &self.title,
            EditingField::Content => &self.content,
        }
    }

    fn current_input_mut(&mut self) -> Option<&mut String> {
        match self.currently_editing {
            Some(EditingField::Title) => Some(&mut self.title),
            Some(EditingField::Content) => Some(&mut self.content),
            None => None,
        }
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(input) = self.current_input_mut() {
            input.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(input) = self.current_input_mut() {
            input.pop();
        }
    }

    pub fn get_error(&self, field: EditingField) -> Option<&String> {
        self.validation_errors.get(field.field_name())
    }

    pub fn set_error(&mut self, field: EditingField, error: String) {
        self.validation_errors
            .insert(field.field_name().to_string(), error);
    }

    pub fn clear_errors(&mut self) {
        self.validation_errors.clear();
    }

    pub fn has_errors(&self) -> bool {
        !self.validation_errors.is_empty()
    }
}
