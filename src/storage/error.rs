//! Store error handling

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::alias::ValidationError;

/// Errors that can occur during store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// The user's home directory could not be determined
    #[error("Could not determine home directory. Set the HOME environment variable or FN_BOOKMARKS_FILE.")]
    HomeResolution,

    /// Failed to create the storage directory
    #[error("Failed to create directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to read the bookmarks file
    #[error("Failed to read bookmarks file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to write the bookmarks file
    #[error("Failed to write bookmarks file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to encode the container
    #[error("Failed to serialize bookmarks: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The bookmarks file exists but is not a valid document
    #[error("Failed to parse bookmarks file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Operation on an alias that is not bookmarked
    #[error("Bookmark not found: {alias}")]
    NotFound { alias: String },

    /// Alias breaks the format or reserved-word rule
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl StoreError {
    /// Whether this error came from the filesystem
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(
            self,
            Self::CreateDirectory { .. } | Self::Read { .. } | Self::Write { .. }
        )
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
