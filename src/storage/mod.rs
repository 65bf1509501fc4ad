//! Document storage
//!
//! The only persisted state is the exported JSON document.

mod document;

pub use document::DocumentFile;

/// Default working document and export file name
pub const DEFAULT_DOCUMENT_FILE: &str = "data.json";

use crate::errors::Result;
use crate::model::{EntryListModel, EntryPolicy};

/// 打开工作文档：文件存在则导入，否则从空列表开始
pub fn open_document<P: Into<std::path::PathBuf>>(
    path: P,
    policy: EntryPolicy,
) -> Result<(EntryListModel, DocumentFile)> {
    let doc = DocumentFile::new(path);
    let mut model = EntryListModel::new(policy);
    doc.load_into(&mut model)?;
    Ok((model, doc))
}
