//! Delete command - Remove a bookmark after confirmation

use anyhow::{Context, Result};

use crate::color;
use crate::commands::common::{confirm, open_store};
use crate::config::Config;
use crate::domain::bookmark::display_path;

/// Remove `alias`, asking first unless `yes` is set
///
/// # Errors
/// Returns an error if:
/// - The alias does not exist
/// - The confirmation cannot be read
/// - The store cannot be opened or written
pub fn cmd_delete(
    alias: &str,
    yes: bool,
    config: &Config,
    color_mode: color::ColorMode,
) -> Result<()> {
    let mut store = open_store(config)?;
    let Some(bookmark) = store.get(alias) else {
        anyhow::bail!("Alias '{alias}' not found");
    };

    if !yes {
        let prompt = format!(
            "Delete '{}' → {}?",
            color_mode.colorize_alias(alias),
            color_mode.colorize_path(&display_path(&bookmark.path))
        );
        if !confirm(&prompt)? {
            eprintln!("Cancelled.");
            return Ok(());
        }
    }

    store
        .delete(alias)
        .with_context(|| format!("Failed to delete bookmark '{alias}'"))?;

    eprintln!(
        "{}",
        color::success(
            color_mode,
            format!("Deleted '{}'", color_mode.colorize_alias(alias))
        )
    );
    Ok(())
}
