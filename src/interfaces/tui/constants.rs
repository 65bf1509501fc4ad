//! TUI 常量定义
//!
//! 集中管理所有 UI 相关的常量，避免魔法数字分散在代码各处

use std::time::Duration;

/// 内容列显示截断长度（字符）
pub const CONTENT_TRUNCATE_LENGTH: usize = 60;

/// 翻页滚动步长
pub const PAGE_SCROLL_STEP: usize = 10;

/// 事件轮询间隔，用于提示自动消失
pub const TICK_RATE: Duration = Duration::from_millis(250);

/// 弹窗尺寸配置
#[derive(Debug, Clone, Copy)]
pub struct PopupSize {
    /// 宽度百分比 (0-100)
    pub width: u16,
    /// 高度百分比 (0-100)
    pub height: u16,
}

impl PopupSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// 各弹窗的尺寸配置
pub mod popup {
    use super::PopupSize;

    /// 帮助弹窗
    pub const HELP: PopupSize = PopupSize::new(70, 80);
    /// 删除确认弹窗
    pub const DELETE_CONFIRM: PopupSize = PopupSize::new(65, 45);
    /// 导入路径输入
    pub const IMPORT_PATH: PopupSize = PopupSize::new(60, 30);
    /// 导出文件名输入
    pub const EXPORT_FILENAME: PopupSize = PopupSize::new(60, 30);
    /// 退出确认
    pub const EXITING: PopupSize = PopupSize::new(50, 25);
}

/// 颜色主题
pub mod colors {
    use ratatui::style::Color;

    pub const PRIMARY: Color = Color::Cyan;
    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;
    /// 次要文本色
    pub const MUTED: Color = Color::DarkGray;
    pub const HIGHLIGHT_BG: Color = Color::Yellow;
    pub const HIGHLIGHT_FG: Color = Color::Black;
}
