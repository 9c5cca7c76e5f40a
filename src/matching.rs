//! Approximate alias matching
//!
//! Used when an exact alias lookup misses: fuzzy scoring for partial input,
//! recency ordering for `recent`, and edit-distance suggestions for typos.
//! All functions are pure over a container snapshot.

use std::cmp::Ordering;

use crate::domain::bookmark::{Bookmark, BookmarkContainer};

/// Score awarded to a case-insensitive exact match
pub const EXACT_SCORE: u64 = 1000;

/// A candidate alias with its ranking score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuzzyMatch<'a> {
    pub alias: &'a str,
    pub bookmark: &'a Bookmark,
    pub score: u64,
}

/// Score how well `pattern` matches `alias`, case-insensitively
///
/// - exact match: 1000
/// - prefix: 800 + 10 per pattern character
/// - substring: 500 + 5 per pattern character
/// - otherwise an in-order character scan: 100 per matched character, 150
///   when the match sits at the same index as the pattern position. Fewer
///   than half the pattern characters matched scores 0.
#[must_use]
pub fn score(pattern: &str, alias: &str) -> u64 {
    let pattern = pattern.to_lowercase();
    let alias = alias.to_lowercase();
    score_folded(&pattern, &alias)
}

fn score_folded(pattern: &str, alias: &str) -> u64 {
    if pattern == alias {
        return EXACT_SCORE;
    }

    let pattern_len = pattern.chars().count() as u64;
    if alias.starts_with(pattern) {
        return 800 + pattern_len * 10;
    }
    if alias.contains(pattern) {
        return 500 + pattern_len * 5;
    }

    let pattern_chars: Vec<char> = pattern.chars().collect();
    let mut matched = 0usize;
    let mut total = 0u64;

    for (index, ch) in alias.chars().enumerate() {
        if pattern_chars.get(matched) == Some(&ch) {
            total += if index == matched { 150 } else { 100 };
            matched += 1;
        }
    }

    if matched < pattern_chars.len() / 2 {
        return 0;
    }
    total
}

/// Levenshtein distance between two strings
///
/// Insertions, deletions and substitutions each cost 1. Operates on
/// characters, not bytes.
#[must_use]
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let width = b.len() + 1;
    let mut table = vec![0usize; (a.len() + 1) * width];

    for (i, row) in table.chunks_mut(width).enumerate() {
        row[0] = i;
    }
    for (j, cell) in table.iter_mut().take(width).enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let deletion = table[(i - 1) * width + j] + 1;
            let insertion = table[i * width + j - 1] + 1;
            let substitution = table[(i - 1) * width + j - 1] + cost;
            table[i * width + j] = deletion.min(insertion).min(substitution);
        }
    }

    table[a.len() * width + b.len()]
}

/// Best score first, then most used, then alias order
fn by_score(a: &FuzzyMatch<'_>, b: &FuzzyMatch<'_>) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| b.bookmark.used_count.cmp(&a.bookmark.used_count))
        .then_with(|| a.alias.cmp(b.alias))
}

impl BookmarkContainer {
    /// All aliases with a positive fuzzy score for `pattern`, best first
    #[must_use]
    pub fn find_fuzzy_matches(&self, pattern: &str) -> Vec<FuzzyMatch<'_>> {
        let pattern = pattern.to_lowercase();

        let mut matches: Vec<FuzzyMatch<'_>> = self
            .bookmarks
            .iter()
            .filter_map(|(alias, bookmark)| {
                let score = score_folded(&pattern, &alias.to_lowercase());
                (score > 0).then_some(FuzzyMatch {
                    alias,
                    bookmark,
                    score,
                })
            })
            .collect();

        matches.sort_by(by_score);
        matches
    }

    /// All aliases ordered by `last_used`, most recent first
    ///
    /// Ties go to the more used bookmark, then alias order. A `limit` of 0
    /// returns every bookmark. Each match carries its `used_count` as score.
    #[must_use]
    pub fn recently_used(&self, limit: usize) -> Vec<FuzzyMatch<'_>> {
        let mut matches: Vec<FuzzyMatch<'_>> = self
            .bookmarks
            .iter()
            .map(|(alias, bookmark)| FuzzyMatch {
                alias,
                bookmark,
                score: bookmark.used_count,
            })
            .collect();

        matches.sort_by(|a, b| {
            b.bookmark
                .last_used
                .cmp(&a.bookmark.last_used)
                .then_with(|| b.bookmark.used_count.cmp(&a.bookmark.used_count))
                .then_with(|| a.alias.cmp(b.alias))
        });

        if limit > 0 {
            matches.truncate(limit);
        }
        matches
    }

    /// Aliases within `max_distance` edits of `input`, excluding exact hits
    ///
    /// Score is `1000 - 100 * distance`, plus 200 when the alias starts with
    /// the input.
    #[must_use]
    pub fn suggest(&self, input: &str, max_distance: usize) -> Vec<FuzzyMatch<'_>> {
        let input = input.to_lowercase();

        let mut suggestions: Vec<FuzzyMatch<'_>> = self
            .bookmarks
            .iter()
            .filter_map(|(alias, bookmark)| {
                let folded = alias.to_lowercase();
                let distance = edit_distance(&input, &folded);
                if distance == 0 || distance > max_distance {
                    return None;
                }

                let penalty = u64::try_from(distance).unwrap_or(u64::MAX).saturating_mul(100);
                let mut score = EXACT_SCORE.saturating_sub(penalty);
                if folded.starts_with(&input) {
                    score += 200;
                }
                Some(FuzzyMatch {
                    alias,
                    bookmark,
                    score,
                })
            })
            .collect();

        suggestions.sort_by(by_score);
        suggestions
    }
}
