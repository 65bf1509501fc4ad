//! Configuration management
//!
//! TOML file + `EF__*` environment variables, loaded through the `config` crate.

mod structs;
pub mod validators;

pub use structs::*;
pub use validators::validate_config;
