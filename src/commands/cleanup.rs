//! Cleanup command - Drop bookmarks whose directories are gone

use anyhow::{Context, Result};

use crate::color;
use crate::commands::common::open_store;
use crate::config::Config;
use crate::service::missing_aliases;

/// Remove every bookmark whose directory no longer exists
///
/// All removals are written in one pass.
///
/// # Errors
/// Returns an error if the store cannot be opened or written.
pub fn cmd_cleanup(config: &Config, color_mode: color::ColorMode) -> Result<()> {
    let mut store = open_store(config)?;
    let missing = missing_aliases(store.container());

    if missing.is_empty() {
        eprintln!(
            "{}",
            color::success(color_mode, "All bookmarks are valid - no cleanup needed")
        );
        return Ok(());
    }

    let removed = store
        .delete_many(&missing)
        .context("Failed to remove missing bookmarks")?;

    eprintln!(
        "{}",
        color::success(
            color_mode,
            format!("Removed {} missing bookmark(s):", removed.len())
        )
    );
    let last = removed.len().saturating_sub(1);
    for (i, alias) in removed.iter().enumerate() {
        eprintln!(
            "{}",
            color::tree_item(color_mode, color_mode.colorize_alias(alias), i == last)
        );
    }
    Ok(())
}
