//! Entry list domain model
//!
//! - `entry`: the Title/Content pair and its wire format
//! - `policy`: limits and opt-in validation rules
//! - `validation`: ordered input checks
//! - `metrics`: character totals, serialized size and display helpers
//! - `entry_list`: the owned list, edit session, import and export

mod entry;
mod entry_list;
mod error;
mod metrics;
mod policy;
mod validation;

pub use entry::{Entry, char_len};
pub use entry_list::{EntryListModel, parse_entries};
pub use error::{EditError, ExportError, ImportError, IndexError, ValidationError};
pub use metrics::{FieldCounter, Metrics, encode_compact, format_kb};
pub use policy::{
    DEFAULT_CONTENT_MAX_CHARS, DEFAULT_SIZE_LIMIT_BYTES, DEFAULT_TITLE_MAX_CHARS, EntryPolicy,
};
pub use validation::validate_entry;
