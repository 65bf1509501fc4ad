//! Entry management commands
//!
//! This module provides CLI commands that operate on the working document.

mod add;
mod edit;
mod helpers;
mod import_export;
mod list;
mod remove;
mod stats;
mod validate;

pub use add::add_entry;
pub use edit::edit_entry;
pub use helpers::WorkingDocument;
pub use import_export::{export_entries, import_entries};
pub use list::list_entries;
pub use remove::remove_entry;
pub use stats::show_stats;
pub use validate::validate_entry;
