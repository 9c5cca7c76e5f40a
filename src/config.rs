//! Configuration module
//!
//! This module handles loading fast-nav settings from a global TOML file.

pub mod loader;
pub mod schema;

pub use loader::BOOKMARKS_FILE_ENV;
pub use schema::{Config, LogConfig, NavigateConfig, RecentConfig, StorageConfig};
