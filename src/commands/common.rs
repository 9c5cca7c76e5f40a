//! Common utility functions for command handlers
//!
//! This module contains shared helper functions used across multiple commands.

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::color;
use crate::config::Config;
use crate::domain::bookmark::display_path;
use crate::matching::FuzzyMatch;
use crate::storage::Store;

/// Open the bookmark store configured for this invocation
///
/// # Errors
/// Returns an error if the bookmarks file location cannot be resolved or the
/// file cannot be loaded.
pub fn open_store(config: &Config) -> Result<Store> {
    let path = config.bookmarks_path()?;
    Store::open(&path)
        .with_context(|| format!("Failed to open bookmarks: {}", display_path(&path)))
}

/// The directory the command was run from
///
/// # Errors
/// Returns an error if the working directory is gone or unreadable.
pub fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().context("Failed to get current directory")
}

/// Check that a bookmarked path is still a usable directory
///
/// # Errors
/// Returns an error naming the cause: the path is gone, is not a directory,
/// or cannot be inspected.
pub fn ensure_directory(path: &Path) -> Result<()> {
    match std::fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => anyhow::bail!("Not a directory: {}", path.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            anyhow::bail!("Directory no longer exists: {}", path.display())
        }
        Err(e) => {
            Err(e).with_context(|| format!("Failed to access directory: {}", path.display()))
        }
    }
}

/// Ask a yes/no question on stderr and read the answer from stdin
///
/// Only `y` or `yes` (any case) confirm. End of input declines.
///
/// # Errors
/// Returns an error if stdin cannot be read.
pub fn confirm(prompt: &str) -> Result<bool> {
    eprint!("{prompt} [y/N] ");
    io::stderr().flush().ok();

    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read confirmation")?;

    Ok(is_affirmative(&input))
}

fn is_affirmative(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Print up to `limit` candidates as `alias -> path` lines on stderr
pub fn print_candidates(matches: &[FuzzyMatch<'_>], limit: usize, color_mode: color::ColorMode) {
    for m in matches.iter().take(limit) {
        let path = display_path(&m.bookmark.path);
        eprintln!("{}", color::candidate(color_mode, m.alias, &path));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_affirmative() {
        assert!(is_affirmative("y\n"));
        assert!(is_affirmative("YES"));
        assert!(is_affirmative("  Yes  \n"));
        assert!(!is_affirmative("n\n"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("yep"));
    }

    #[test]
    fn test_current_dir_is_absolute() {
        assert!(current_dir().unwrap().is_absolute());
    }

    #[test]
    fn test_ensure_directory_reports_cause() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("file");
        std::fs::write(&file, "").unwrap();

        assert!(ensure_directory(dir.path()).is_ok());

        let err = ensure_directory(&file).unwrap_err().to_string();
        assert!(err.starts_with("Not a directory"), "{err}");

        let err = ensure_directory(&dir.path().join("gone")).unwrap_err().to_string();
        assert!(err.starts_with("Directory no longer exists"), "{err}");
    }
}
