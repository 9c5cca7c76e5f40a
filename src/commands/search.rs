//! Search command - Find bookmarks by alias or path text

use anyhow::Result;

use crate::color;
use crate::commands::common::open_store;
use crate::commands::list::print_bookmarks;
use crate::config::Config;
use crate::service::search;

/// List bookmarks whose alias or path contains `pattern`
///
/// An empty result is reported but is not an error.
///
/// # Errors
/// Returns an error if the store cannot be opened.
pub fn cmd_search(
    pattern: &str,
    long: bool,
    config: &Config,
    color_mode: color::ColorMode,
) -> Result<()> {
    let store = open_store(config)?;
    let matches = search(store.container(), pattern);

    if matches.is_empty() {
        eprintln!(
            "{}",
            color::info(
                color_mode,
                format!("No bookmarks found matching '{pattern}'")
            )
        );
        return Ok(());
    }

    print_bookmarks(&matches, long, color_mode);
    Ok(())
}
