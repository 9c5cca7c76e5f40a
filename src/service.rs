//! Bookmark lookups shared by the navigation commands
//!
//! Pure functions over a loaded container. The command layer decides what to
//! print and whether to record usage.

use crate::domain::bookmark::{Bookmark, BookmarkContainer};
use crate::matching::FuzzyMatch;

/// Outcome of resolving user input to a bookmark
#[derive(Debug, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The input is a saved alias
    Exact {
        alias: &'a str,
        bookmark: &'a Bookmark,
    },
    /// Exactly one alias matched approximately
    Unique(FuzzyMatch<'a>),
    /// Several aliases matched approximately, best first
    Ambiguous(Vec<FuzzyMatch<'a>>),
    /// Nothing matched; typo suggestions (possibly empty), best first
    Unresolved(Vec<FuzzyMatch<'a>>),
}

impl<'a> Resolution<'a> {
    /// The alias and bookmark to navigate to, if resolution succeeded
    #[must_use]
    pub fn target(&self) -> Option<(&'a str, &'a Bookmark)> {
        match self {
            Self::Exact { alias, bookmark } => Some((*alias, *bookmark)),
            Self::Unique(m) => Some((m.alias, m.bookmark)),
            Self::Ambiguous(_) | Self::Unresolved(_) => None,
        }
    }
}

/// Resolve `query` to a bookmark
///
/// Tries an exact alias first, then fuzzy matching. Typo suggestions within
/// `max_distance` edits are only computed when fuzzy matching finds nothing.
#[must_use]
pub fn resolve<'a>(
    container: &'a BookmarkContainer,
    query: &str,
    max_distance: usize,
) -> Resolution<'a> {
    if let Some((alias, bookmark)) = container.bookmarks.get_key_value(query) {
        return Resolution::Exact { alias, bookmark };
    }

    let mut matches = container.find_fuzzy_matches(query);
    match matches.len() {
        0 => Resolution::Unresolved(container.suggest(query, max_distance)),
        1 => Resolution::Unique(matches.remove(0)),
        _ => Resolution::Ambiguous(matches),
    }
}

/// Bookmarks whose alias or path contains `pattern`, case-insensitively
#[must_use]
pub fn search<'a>(container: &'a BookmarkContainer, pattern: &str) -> Vec<(&'a str, &'a Bookmark)> {
    let pattern = pattern.to_lowercase();
    container
        .bookmarks
        .iter()
        .filter(|(alias, bookmark)| {
            alias.to_lowercase().contains(&pattern)
                || bookmark
                    .path
                    .to_string_lossy()
                    .to_lowercase()
                    .contains(&pattern)
        })
        .map(|(alias, bookmark)| (alias.as_str(), bookmark))
        .collect()
}

/// Aliases whose path no longer exists
///
/// Only paths that are reported as not found count; anything else is kept.
#[must_use]
pub fn missing_aliases(container: &BookmarkContainer) -> Vec<String> {
    container
        .bookmarks
        .iter()
        .filter(|(_, bookmark)| bookmark.is_missing())
        .map(|(alias, _)| alias.clone())
        .collect()
}
