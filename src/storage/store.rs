//! Bookmark store
//!
//! Owns the loaded container for the duration of one command invocation.
//! Every mutation is applied to a staged copy, written to disk, and only
//! then committed to memory, so a failed write leaves the store unchanged.

use chrono::Utc;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::error::{StoreError, StoreResult};
use super::persistence::{ensure_parent_dir, read_container, write_container};
use crate::domain::alias::validate_alias;
use crate::domain::bookmark::{Bookmark, BookmarkContainer};
use crate::matching::FuzzyMatch;

/// Directory under `$HOME` holding the default bookmarks file
pub const DEFAULT_DIR_NAME: &str = ".fn";

/// Default bookmarks file name
pub const DEFAULT_FILE_NAME: &str = "bookmarks.json";

/// Default bookmarks location: `~/.fn/bookmarks.json`
///
/// # Errors
/// Returns [`StoreError::HomeResolution`] if the home directory is unknown.
pub fn default_bookmarks_path() -> StoreResult<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_DIR_NAME).join(DEFAULT_FILE_NAME))
        .ok_or(StoreError::HomeResolution)
}

/// Persistent alias → bookmark store backed by a single JSON file
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    container: BookmarkContainer,
}

impl Store {
    /// Load the store from `path`
    ///
    /// A missing file is initialized with an empty container and written
    /// immediately.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, the file cannot
    /// be read or written, or its content cannot be parsed.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        ensure_parent_dir(&path)?;

        if let Some(container) = read_container(&path)? {
            return Ok(Self { path, container });
        }

        debug!(path = %path.display(), "initializing empty bookmarks file");
        let store = Self {
            path,
            container: BookmarkContainer::default(),
        };
        store.save()?;
        Ok(store)
    }

    /// Load the store from the default location
    ///
    /// # Errors
    /// See [`default_bookmarks_path`] and [`Store::open`].
    pub fn open_default() -> StoreResult<Self> {
        Self::open(default_bookmarks_path()?)
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The loaded container
    #[must_use]
    pub const fn container(&self) -> &BookmarkContainer {
        &self.container
    }

    /// Rewrite the backing file with the current container
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save(&self) -> StoreResult<()> {
        write_container(&self.path, &self.container)
    }

    /// Look up a bookmark by exact alias
    #[must_use]
    pub fn get(&self, alias: &str) -> Option<&Bookmark> {
        self.container.bookmarks.get(alias)
    }

    /// All bookmarks keyed by alias
    #[must_use]
    pub const fn all(&self) -> &BTreeMap<String, Bookmark> {
        &self.container.bookmarks
    }

    /// Whether no bookmarks are saved
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.container.bookmarks.is_empty()
    }

    /// Create or re-point a bookmark
    ///
    /// An existing alias keeps its `created` and `used_count`; its path is
    /// replaced and `last_used` set to now. A new alias starts unused.
    ///
    /// # Errors
    /// Returns a validation error for an invalid alias, or an I/O error if
    /// persisting fails.
    pub fn upsert(&mut self, alias: &str, path: impl Into<PathBuf>) -> StoreResult<()> {
        validate_alias(alias)?;
        let path = path.into();
        let now = Utc::now();

        self.commit(|container| {
            match container.bookmarks.get_mut(alias) {
                Some(existing) => {
                    existing.path = path;
                    existing.last_used = now;
                }
                None => {
                    container
                        .bookmarks
                        .insert(alias.to_string(), Bookmark::new(path, now));
                }
            }
            Ok(())
        })?;

        info!(alias, "saved bookmark");
        Ok(())
    }

    /// Remove a bookmark
    ///
    /// Removing an unknown alias is a no-op and does not touch the file.
    ///
    /// # Errors
    /// Returns an error if persisting fails.
    pub fn delete(&mut self, alias: &str) -> StoreResult<Option<Bookmark>> {
        if !self.container.bookmarks.contains_key(alias) {
            debug!(alias, "delete of unknown alias ignored");
            return Ok(None);
        }

        let removed = self.commit(|container| Ok(container.bookmarks.remove(alias)))?;
        info!(alias, "deleted bookmark");
        Ok(removed)
    }

    /// Remove several bookmarks with a single rewrite
    ///
    /// Returns the aliases that were actually removed.
    ///
    /// # Errors
    /// Returns an error if persisting fails.
    pub fn delete_many<S: AsRef<str>>(&mut self, aliases: &[S]) -> StoreResult<Vec<String>> {
        let present: Vec<String> = aliases
            .iter()
            .map(AsRef::<str>::as_ref)
            .filter(|alias| self.container.bookmarks.contains_key(*alias))
            .map(ToString::to_string)
            .collect();

        if present.is_empty() {
            return Ok(present);
        }

        self.commit(|container| {
            for alias in &present {
                container.bookmarks.remove(alias);
            }
            Ok(())
        })?;

        info!(count = present.len(), "deleted bookmarks");
        Ok(present)
    }

    /// Record a visit: bump `used_count` and set `last_used` to now
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] for an unknown alias, or an I/O
    /// error if persisting fails.
    pub fn touch(&mut self, alias: &str) -> StoreResult<()> {
        let now = Utc::now();
        self.commit(|container| {
            let bookmark = container
                .bookmarks
                .get_mut(alias)
                .ok_or_else(|| StoreError::NotFound {
                    alias: alias.to_string(),
                })?;
            bookmark.used_count = bookmark.used_count.saturating_add(1);
            bookmark.last_used = now;
            Ok(())
        })?;

        debug!(alias, "recorded bookmark usage");
        Ok(())
    }

    /// Bookmarks approximately matching `pattern`, best first
    #[must_use]
    pub fn find_fuzzy_matches(&self, pattern: &str) -> Vec<FuzzyMatch<'_>> {
        self.container.find_fuzzy_matches(pattern)
    }

    /// Bookmarks by most recent use; `limit == 0` returns all of them
    #[must_use]
    pub fn recently_used(&self, limit: usize) -> Vec<FuzzyMatch<'_>> {
        self.container.recently_used(limit)
    }

    /// Aliases within `max_distance` edits of `input`, best first
    #[must_use]
    pub fn suggest(&self, input: &str, max_distance: usize) -> Vec<FuzzyMatch<'_>> {
        self.container.suggest(input, max_distance)
    }

    /// Apply `mutate` to a staged copy, persist it, then commit it
    fn commit<T>(
        &mut self,
        mutate: impl FnOnce(&mut BookmarkContainer) -> StoreResult<T>,
    ) -> StoreResult<T> {
        let mut staged = self.container.clone();
        let value = mutate(&mut staged)?;
        write_container(&self.path, &staged)?;
        self.container = staged;
        Ok(value)
    }
}
