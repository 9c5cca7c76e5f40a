//! Recent command - Show or jump to recently used bookmarks

use anyhow::Result;
use chrono::Utc;
use tracing::warn;

use crate::color;
use crate::commands::common::{ensure_directory, open_store};
use crate::config::Config;
use crate::domain::bookmark::{display_path, format_last_used, format_used_count};
use crate::storage::Store;

/// List the most recent bookmarks, or navigate to the `index`-th one
///
/// With an index the path is printed on stdout and the visit recorded, the
/// same as navigating by alias.
///
/// # Errors
/// Returns an error if:
/// - The store cannot be opened
/// - `index` is outside the listed range
/// - The selected directory is gone or unusable
pub fn cmd_recent(
    index: Option<usize>,
    config: &Config,
    color_mode: color::ColorMode,
) -> Result<()> {
    let mut store = open_store(config)?;
    let limit = config.recent.limit;

    let Some(index) = index else {
        print_recent(&store, limit, color_mode);
        return Ok(());
    };

    let recent = store.recently_used(limit);
    if recent.is_empty() {
        anyhow::bail!("No bookmarks saved yet");
    }
    if index == 0 || index > recent.len() {
        anyhow::bail!(
            "Index out of range: {index} (available: 1-{})",
            recent.len()
        );
    }

    let selected = &recent[index - 1];
    let alias = selected.alias.to_string();
    let path = selected.bookmark.path.clone();

    ensure_directory(&path)?;

    if let Err(e) = store.touch(&alias) {
        warn!(alias = %alias, error = %e, "failed to record bookmark usage");
    }

    println!("{}", path.display());
    Ok(())
}

fn print_recent(store: &Store, limit: usize, color_mode: color::ColorMode) {
    let recent = store.recently_used(limit);
    if recent.is_empty() {
        eprintln!(
            "{}",
            color::info(
                color_mode,
                "No bookmarks saved yet. Use 'fn save <alias>' to create one."
            )
        );
        return;
    }

    let now = Utc::now();
    let alias_width = recent
        .iter()
        .map(|m| m.alias.chars().count())
        .max()
        .unwrap_or(0);

    eprintln!("Recently used bookmarks:");
    eprintln!();
    for (i, m) in recent.iter().enumerate() {
        let alias_pad = " ".repeat(alias_width - m.alias.chars().count());
        let details = format!(
            "({}, {})",
            format_used_count(m.bookmark.used_count),
            format_last_used(m.bookmark.last_used, now)
        );
        eprintln!(
            "  {} {}{alias_pad}  {}  {}",
            color_mode.colorize_index(&format!("{}.", i + 1)),
            color_mode.colorize_alias(m.alias),
            color_mode.colorize_path(&display_path(&m.bookmark.path)),
            color_mode.colorize_secondary(&details)
        );
    }
    eprintln!();
    eprintln!(
        "{}",
        color::dim(
            color_mode,
            "Use 'fn recent <index>' to navigate directly (e.g. 'fn recent 1')"
        )
    );
}
