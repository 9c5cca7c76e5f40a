//! Container persistence
//!
//! Reads and writes the bookmark container as pretty-printed JSON. Writes go
//! to a sibling temp file that is synced and then renamed over the target, so
//! the file on disk is either the previous version or the new one.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::{StoreError, StoreResult};
use crate::domain::bookmark::BookmarkContainer;

/// Read the container at `path`
///
/// Returns `Ok(None)` when the file does not exist.
pub fn read_container(path: &Path) -> StoreResult<Option<BookmarkContainer>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let container = serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = bytes.len(), "loaded bookmarks");
    Ok(Some(container))
}

/// Serialize and atomically write the container to `path`
pub fn write_container(path: &Path, container: &BookmarkContainer) -> StoreResult<()> {
    let mut data = serde_json::to_vec_pretty(container).map_err(StoreError::Serialize)?;
    data.push(b'\n');

    atomic_write(path, &data)?;
    debug!(
        path = %path.display(),
        bookmarks = container.bookmarks.len(),
        "saved bookmarks"
    );
    Ok(())
}

/// Create the parent directory of `path` if it is missing
pub fn ensure_parent_dir(path: &Path) -> StoreResult<()> {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    if parent.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(parent).map_err(|source| StoreError::CreateDirectory {
        path: parent.to_path_buf(),
        source,
    })
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_synced(path: &Path, data: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data)?;
    file.sync_all()
}

fn atomic_write(path: &Path, data: &[u8]) -> StoreResult<()> {
    ensure_parent_dir(path)?;

    let temp_path = temp_path_for(path);
    let result = write_synced(&temp_path, data).and_then(|()| fs::rename(&temp_path, path));

    if let Err(source) = result {
        // The target is untouched; drop the partial temp file
        let _ = fs::remove_file(&temp_path);
        return Err(StoreError::Write {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}
