//! Bookmark storage
//!
//! A single JSON file holds every bookmark. It is loaded once per command
//! invocation and rewritten in full after each mutation.

pub mod error;
pub mod persistence;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::{default_bookmarks_path, Store};
