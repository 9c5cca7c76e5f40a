use clap::{Parser, Subcommand};
use clap_complete::engine::{ArgValueCompleter, CompletionCandidate};
use std::ffi::OsStr;

use crate::config::Config;
use crate::storage::persistence::read_container;

/// Bookmark directories under short aliases and jump back to them
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// When to use colored output
    #[arg(long, value_name = "WHEN", global = true, ignore_case = true)]
    pub color: Option<crate::color::ColorMode>,

    /// Bookmark to navigate to (prints its path)
    #[arg(allow_hyphen_values = true, add = ArgValueCompleter::new(complete_aliases))]
    pub alias: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the path of a bookmark and record the visit
    Navigate {
        /// Alias, partial alias, or near-miss spelling
        #[arg(allow_hyphen_values = true, add = ArgValueCompleter::new(complete_aliases))]
        alias: String,
    },
    /// Bookmark the current directory
    Save {
        /// Alias to save under (letters, digits, '-' and '_')
        #[arg(allow_hyphen_values = true)]
        alias: String,
    },
    /// Point an existing bookmark at the current directory
    Edit {
        /// Alias to update
        #[arg(allow_hyphen_values = true, add = ArgValueCompleter::new(complete_aliases))]
        alias: String,
    },
    /// Remove a bookmark
    #[command(visible_alias = "rm")]
    Delete {
        /// Alias to remove
        #[arg(allow_hyphen_values = true, add = ArgValueCompleter::new(complete_aliases))]
        alias: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Print the path of a bookmark without recording a visit
    Path {
        /// Alias to look up
        #[arg(allow_hyphen_values = true, add = ArgValueCompleter::new(complete_aliases))]
        alias: String,
    },
    /// List all bookmarks
    #[command(visible_alias = "ls")]
    List {
        /// Print the full table even when output is piped
        #[arg(short, long)]
        long: bool,
    },
    /// Find bookmarks whose alias or path contains a pattern
    Search {
        /// Case-insensitive text to look for
        pattern: String,
        /// Print the full table even when output is piped
        #[arg(short, long)]
        long: bool,
    },
    /// Show recently used bookmarks, or jump to one by number
    #[command(visible_alias = "r")]
    Recent {
        /// 1-based position in the recent list
        index: Option<usize>,
    },
    /// Remove bookmarks whose directories no longer exist
    Cleanup,
    /// Create the configuration file
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
    /// Generate shell completion setup
    Completion {
        /// Shell type (bash, zsh, fish)
        shell: String,
    },
    /// Generate the `fn` shell function
    ShellInit {
        /// Shell type (bash, zsh, fish)
        shell: String,
    },
}

/// Complete saved aliases starting with `current`
///
/// Reads the bookmarks file without creating it. Any failure yields no
/// candidates so completion never prints errors into the prompt.
#[must_use]
pub fn complete_aliases(current: &OsStr) -> Vec<CompletionCandidate> {
    let Ok(path) =
        Config::load().and_then(|config| config.bookmarks_path().map_err(Into::into))
    else {
        return Vec::new();
    };
    let Ok(Some(container)) = read_container(&path) else {
        return Vec::new();
    };

    let prefix = current.to_string_lossy();
    container
        .bookmarks
        .iter()
        .filter(|(alias, _)| alias.starts_with(&*prefix))
        .map(|(alias, bookmark)| {
            CompletionCandidate::new(alias)
                .help(Some(bookmark.path.display().to_string().into()))
        })
        .collect()
}
