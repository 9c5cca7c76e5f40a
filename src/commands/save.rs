//! Save command - Bookmark the current directory

use anyhow::{Context, Result};

use crate::color;
use crate::commands::common::{current_dir, open_store};
use crate::config::Config;
use crate::domain::alias::validate_alias;
use crate::domain::bookmark::display_path;

/// Bookmark the current directory under `alias`
///
/// Saving over an existing alias re-points it and keeps its usage history.
///
/// # Errors
/// Returns an error if:
/// - The alias is invalid or reserved
/// - The current directory cannot be determined
/// - The store cannot be opened or written
pub fn cmd_save(alias: &str, config: &Config, color_mode: color::ColorMode) -> Result<()> {
    validate_alias(alias)?;
    let dir = current_dir()?;

    let mut store = open_store(config)?;
    store
        .upsert(alias, dir.clone())
        .with_context(|| format!("Failed to save bookmark '{alias}'"))?;

    eprintln!(
        "{}",
        color::success(
            color_mode,
            format!(
                "Saved '{}' → {}",
                color_mode.colorize_alias(alias),
                color_mode.colorize_path(&display_path(&dir))
            )
        )
    );
    Ok(())
}
