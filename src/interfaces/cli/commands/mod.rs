//! CLI command implementations
//!
//! This module re-exports all CLI command functions.

pub mod config_management;
mod entry_management;
mod help;

pub use entry_management::*;
pub use help::*;
