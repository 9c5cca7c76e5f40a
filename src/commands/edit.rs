//! Edit command - Re-point an existing bookmark at the current directory

use anyhow::{Context, Result};

use crate::color;
use crate::commands::common::{current_dir, open_store};
use crate::config::Config;
use crate::domain::bookmark::display_path;

/// Point the existing `alias` at the current directory
///
/// # Errors
/// Returns an error if the alias does not exist or the store cannot be
/// opened or written.
pub fn cmd_edit(alias: &str, config: &Config, color_mode: color::ColorMode) -> Result<()> {
    let mut store = open_store(config)?;
    let Some(previous) = store.get(alias).map(|b| b.path.clone()) else {
        anyhow::bail!("Alias '{alias}' does not exist");
    };

    let dir = current_dir()?;
    store
        .upsert(alias, dir.clone())
        .with_context(|| format!("Failed to update bookmark '{alias}'"))?;

    eprintln!(
        "{}",
        color::success(
            color_mode,
            format!(
                "Updated '{}' → {}",
                color_mode.colorize_alias(alias),
                color_mode.colorize_path(&display_path(&dir))
            )
        )
    );
    if previous != dir {
        eprintln!(
            "{}",
            color::dim(color_mode, format!("  was {}", display_path(&previous)))
        );
    }
    Ok(())
}
