//! TUI application state and operations

mod entry_operations;
mod file_operations;
mod navigation;
mod state;
mod validation;

pub use state::{App, CurrentScreen, EditingField, FormState, Notice, NoticeKind};
