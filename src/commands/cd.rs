//! Navigate command - Resolve an alias and print its path for the shell

use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::color;
use crate::commands::common::{ensure_directory, open_store, print_candidates};
use crate::config::Config;
use crate::service::{resolve, Resolution};

/// Resolve `query` to a bookmark, print its path and record the visit
///
/// Exact aliases win; otherwise a single fuzzy match is used. Several
/// matches, or none, are reported on stderr and fail.
///
/// # Errors
/// Returns an error if:
/// - The store cannot be opened
/// - The query is ambiguous or matches nothing
/// - The bookmarked directory is gone or unusable
pub fn cmd_navigate(query: &str, config: &Config, color_mode: color::ColorMode) -> Result<()> {
    let mut store = open_store(config)?;
    let max_candidates = config.navigate.max_candidates;

    let (alias, path): (String, PathBuf) =
        match resolve(store.container(), query, config.navigate.max_distance) {
            Resolution::Exact { alias, bookmark } => (alias.to_string(), bookmark.path.clone()),
            Resolution::Unique(m) => {
                debug!(query, alias = m.alias, score = m.score, "fuzzy match");
                (m.alias.to_string(), m.bookmark.path.clone())
            }
            Resolution::Ambiguous(matches) => {
                eprintln!(
                    "{}",
                    color::warn(color_mode, format!("Multiple matches found for '{query}':"))
                );
                eprintln!();
                print_candidates(&matches, max_candidates, color_mode);
                eprintln!();
                eprintln!(
                    "{}",
                    color::dim(color_mode, "Please use a more specific alias.")
                );
                anyhow::bail!("Ambiguous match for '{query}'");
            }
            Resolution::Unresolved(suggestions) => {
                if !suggestions.is_empty() {
                    eprintln!(
                        "{}",
                        color::info(
                            color_mode,
                            format!("No exact match found for '{query}'. Did you mean:")
                        )
                    );
                    eprintln!();
                    print_candidates(&suggestions, max_candidates, color_mode);
                    eprintln!();
                }
                anyhow::bail!("No bookmarks found matching '{query}'");
            }
        };

    ensure_directory(&path)?;

    if let Err(e) = store.touch(&alias) {
        warn!(alias = %alias, error = %e, "failed to record bookmark usage");
    }

    println!("{}", path.display());
    Ok(())
}
