//! entryform - A Title/Content entry editor
//!
//! Builds a small ordered list of Title/Content entries, keeps an eye on the
//! size of its compact JSON encoding and imports/exports that document.
//!
//! # Features
//! - **cli**: Command-line interface (default)
//! - **tui**: Terminal user interface
//! - **full**: All features enabled
//!
//! # Architecture
//! - `model`: Entry list state machine, validation and metrics
//! - `storage`: Reading and writing the JSON document
//! - `interfaces`: User interfaces (CLI, TUI)
//! - `config`: Configuration management
//! - `runtime`: Execution modes
//! - `system`: Logging and panic handling

pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod model;
pub mod runtime;
pub mod storage;
pub mod system;
