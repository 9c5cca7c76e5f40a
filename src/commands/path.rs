//! Path command - Print a bookmark's path without recording a visit

use anyhow::Result;

use crate::commands::common::open_store;
use crate::config::Config;

/// Print the stored path of `alias` on stdout
///
/// # Errors
/// Returns an error if the alias does not exist or the store cannot be
/// opened.
pub fn cmd_path(alias: &str, config: &Config) -> Result<()> {
    let store = open_store(config)?;
    let Some(bookmark) = store.get(alias) else {
        anyhow::bail!("Alias '{alias}' not found");
    };

    println!("{}", bookmark.path.display());
    Ok(())
}
