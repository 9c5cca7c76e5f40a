//! List command - Display all bookmarks with formatting options

use anyhow::Result;
use std::io::IsTerminal;

use crate::color;
use crate::commands::common::open_store;
use crate::config::Config;
use crate::domain::bookmark::{format_bookmark_table, Bookmark};

/// List all bookmarks
///
/// # Errors
/// Returns an error if the store cannot be opened.
pub fn cmd_list(long: bool, config: &Config, color_mode: color::ColorMode) -> Result<()> {
    let store = open_store(config)?;

    if store.is_empty() {
        eprintln!(
            "{}",
            color::info(
                color_mode,
                "No bookmarks saved yet. Use 'fn save <alias>' to create one."
            )
        );
        return Ok(());
    }

    let entries: Vec<(&str, &Bookmark)> = store
        .all()
        .iter()
        .map(|(alias, bookmark)| (alias.as_str(), bookmark))
        .collect();
    print_bookmarks(&entries, long, color_mode);
    Ok(())
}

/// Print bookmarks for a terminal or a pipe
///
/// Stream and format depend only on whether stdout is a TTY; color mode
/// only affects ANSI emission.
/// - TTY: table on stderr
/// - pipe: aliases one per line on stdout, or the table with `long`
pub fn print_bookmarks(entries: &[(&str, &Bookmark)], long: bool, color_mode: color::ColorMode) {
    let is_interactive = std::io::stdout().is_terminal();

    if is_interactive {
        for line in format_bookmark_table(entries, color_mode) {
            eprintln!("{line}");
        }
    } else if long {
        for line in format_bookmark_table(entries, color_mode) {
            println!("{line}");
        }
    } else {
        for (alias, _) in entries {
            println!("{alias}");
        }
    }
}
