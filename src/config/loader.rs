//! Configuration loading logic

use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

use super::schema::Config;
use crate::storage::{default_bookmarks_path, StoreResult};

/// Environment variable overriding the bookmarks file location
pub const BOOKMARKS_FILE_ENV: &str = "FN_BOOKMARKS_FILE";

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Load the global configuration, or defaults when there is none
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be read or parsed
    pub fn load() -> Result<Self> {
        match Self::global_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Get the global config path
    /// Respects `XDG_CONFIG_HOME` when it is absolute.
    /// Fallback: `$HOME/.config/fast-nav/config.toml`
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        let config_home = env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .filter(|p| p.is_absolute())
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))?;

        Some(config_home.join("fast-nav").join("config.toml"))
    }

    /// Resolve the bookmarks file
    ///
    /// Priority: `FN_BOOKMARKS_FILE`, then `storage.file`, then
    /// `~/.fn/bookmarks.json`.
    ///
    /// # Errors
    /// Returns an error if the home directory is needed but unknown
    pub fn bookmarks_path(&self) -> StoreResult<PathBuf> {
        if let Some(file) = env::var_os(BOOKMARKS_FILE_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(file));
        }
        match &self.storage.file {
            Some(file) => Ok(expand_tilde(file)),
            None => default_bookmarks_path(),
        }
    }
}

/// Expand a leading `~` or `~/` to the home directory
fn expand_tilde(path: &str) -> PathBuf {
    let expanded = if path == "~" {
        dirs::home_dir()
    } else {
        path.strip_prefix("~/")
            .and_then(|rest| dirs::home_dir().map(|home| home.join(rest)))
    };
    expanded.unwrap_or_else(|| PathBuf::from(path))
}
