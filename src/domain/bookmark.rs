//! Bookmark domain entities and display helpers
//!
//! This module contains the persisted record model and the table formatting
//! shared by `list` and `search`.

use chrono::{DateTime, Utc};
use chrono_humanize::{Accuracy, HumanTime, Tense};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::color;

/// Format version written to new containers
pub const FORMAT_VERSION: &str = "1.0";

/// A bookmarked directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub path: PathBuf,
    #[serde(default)]
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub used_count: u64,
    #[serde(default)]
    pub last_used: DateTime<Utc>,
}

impl Bookmark {
    /// Create a fresh, never-used bookmark
    #[must_use]
    pub const fn new(path: PathBuf, now: DateTime<Utc>) -> Self {
        Self {
            path,
            created: now,
            used_count: 0,
            last_used: now,
        }
    }

    /// Whether the bookmarked path is gone from disk
    ///
    /// Only a `NotFound` lookup counts. A path that exists but is not a
    /// directory, or that cannot be inspected, is not missing.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(fs::metadata(&self.path), Err(e) if e.kind() == io::ErrorKind::NotFound)
    }
}

/// The full persisted document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkContainer {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub bookmarks: BTreeMap<String, Bookmark>,
}

impl Default for BookmarkContainer {
    fn default() -> Self {
        Self {
            version: default_version(),
            bookmarks: BTreeMap::new(),
        }
    }
}

fn default_version() -> String {
    FORMAT_VERSION.to_string()
}

/// Convert path to display format with tilde (~) for home directory
///
/// Use this for human-readable output (stderr tables, messages).
/// stdout path output must stay absolute so the shell can `cd` into it.
#[must_use]
pub fn display_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(rel) = path.strip_prefix(&home) {
            let rel_str = rel.display().to_string();
            if rel_str.is_empty() {
                return "~".to_string();
            }
            return format!("~/{rel_str}");
        }
    }
    path.display().to_string()
}

/// Human-readable "last used" column, e.g. "3 hours ago"
///
/// Timestamps at or before the Unix epoch come from records written without
/// a `last_used` field and are shown as "never".
#[must_use]
pub fn format_last_used(last_used: DateTime<Utc>, now: DateTime<Utc>) -> String {
    if last_used <= DateTime::<Utc>::UNIX_EPOCH {
        return "never".to_string();
    }
    let duration = now.signed_duration_since(last_used);
    HumanTime::from(duration).to_text_en(Accuracy::Rough, Tense::Past)
}

/// Format the "used N times" column
#[must_use]
pub fn format_used_count(count: u64) -> String {
    if count == 1 {
        "used 1 time".to_string()
    } else {
        format!("used {count} times")
    }
}

/// Bookmark row prepared for display
struct BookmarkDisplay {
    alias: String,
    path: String,
    usage: String,
    timestamp: String,
    missing: bool,
}

/// Format bookmarks as a table with aligned columns
///
/// Columns: marker • alias • path • usage • last used.
/// Rows whose directory no longer exists get a `✗` marker and are
/// rendered as warnings.
#[must_use]
pub fn format_bookmark_table(
    entries: &[(&str, &Bookmark)],
    color_mode: color::ColorMode,
) -> Vec<String> {
    let now = Utc::now();

    let displays: Vec<BookmarkDisplay> = entries
        .iter()
        .map(|(alias, bookmark)| BookmarkDisplay {
            alias: (*alias).to_string(),
            path: display_path(&bookmark.path),
            usage: format_used_count(bookmark.used_count),
            timestamp: format_last_used(bookmark.last_used, now),
            missing: bookmark.is_missing(),
        })
        .collect();

    let max_alias_width = displays
        .iter()
        .map(|d| d.alias.chars().count())
        .max()
        .unwrap_or(0);
    let max_path_width = displays
        .iter()
        .map(|d| d.path.chars().count())
        .max()
        .unwrap_or(0);
    let max_usage_width = displays.iter().map(|d| d.usage.len()).max().unwrap_or(0);

    displays
        .iter()
        .map(|d| {
            let marker = if d.missing {
                color_mode.colorize_missing("✗")
            } else {
                " ".to_string()
            };

            // Manual padding (format! width doesn't account for ANSI codes)
            let alias_pad = " ".repeat(max_alias_width - d.alias.chars().count());
            let path_pad = " ".repeat(max_path_width - d.path.chars().count());
            let usage_pad = " ".repeat(max_usage_width - d.usage.len());

            let colored_alias = if d.missing {
                color_mode.colorize_missing(&d.alias)
            } else {
                color_mode.colorize_alias(&d.alias)
            };
            let colored_path = color_mode.colorize_path(&d.path);
            let colored_timestamp = if d.missing {
                color_mode.colorize_secondary("missing")
            } else {
                color_mode.colorize_secondary(&d.timestamp)
            };

            format!(
                "{marker} {colored_alias}{alias_pad}  {colored_path}{path_pad}  {}{usage_pad}  {colored_timestamp}",
                d.usage
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use serial_test::serial;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_new_bookmark_is_unused() {
        let now = fixed_time();
        let bookmark = Bookmark::new(PathBuf::from("/tmp/x"), now);
        assert_eq!(bookmark.used_count, 0);
        assert_eq!(bookmark.created, now);
        assert_eq!(bookmark.last_used, now);
    }

    #[test]
    fn test_container_default_is_versioned_and_empty() {
        let container = BookmarkContainer::default();
        assert_eq!(container.version, "1.0");
        assert!(container.bookmarks.is_empty());
    }

    #[test]
    fn test_missing_bookmarks_key_defaults_to_empty() {
        let container: BookmarkContainer = serde_json::from_str(r#"{"version":"1.0"}"#).unwrap();
        assert!(container.bookmarks.is_empty());
    }

    #[test]
    fn test_missing_version_defaults() {
        let container: BookmarkContainer = serde_json::from_str(r#"{"bookmarks":{}}"#).unwrap();
        assert_eq!(container.version, FORMAT_VERSION);
    }

    #[test]
    fn test_missing_bookmark_fields_default() {
        let json = r#"{"version":"1.0","bookmarks":{"proj":{"path":"/tmp/proj"}}}"#;
        let container: BookmarkContainer = serde_json::from_str(json).unwrap();
        let bookmark = &container.bookmarks["proj"];
        assert_eq!(bookmark.path, PathBuf::from("/tmp/proj"));
        assert_eq!(bookmark.used_count, 0);
        assert_eq!(bookmark.last_used, DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn test_timestamps_with_offsets_normalize_to_utc() {
        let json = r#"{
            "version": "1.0",
            "bookmarks": {
                "proj": {
                    "path": "/tmp/proj",
                    "created": "2024-05-01T14:00:00+02:00",
                    "used_count": 3,
                    "last_used": "2024-05-01T12:00:00.5Z"
                }
            }
        }"#;
        let container: BookmarkContainer = serde_json::from_str(json).unwrap();
        let bookmark = &container.bookmarks["proj"];
        assert_eq!(bookmark.created, fixed_time());
        assert_eq!(bookmark.used_count, 3);
        assert_eq!(
            bookmark.last_used,
            fixed_time() + Duration::milliseconds(500)
        );
    }

    #[test]
    fn test_serialized_field_names() {
        let mut container = BookmarkContainer::default();
        container
            .bookmarks
            .insert("proj".into(), Bookmark::new(PathBuf::from("/tmp/proj"), fixed_time()));
        let json = serde_json::to_string(&container).unwrap();
        assert!(json.contains(r#""version":"1.0""#));
        assert!(json.contains(r#""used_count":0"#));
        assert!(json.contains(r#""last_used":"2024-05-01T12:00:00Z""#));
        assert!(json.contains(r#""created":"2024-05-01T12:00:00Z""#));
    }

    #[test]
    #[serial]
    fn test_display_path_under_home() {
        if let Some(home) = dirs::home_dir() {
            let result = display_path(&home.join("test/path"));
            assert_eq!(result, "~/test/path");
        }
    }

    #[test]
    #[serial]
    fn test_display_path_home_itself() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(display_path(&home), "~");
        }
    }

    #[test]
    fn test_display_path_outside_home() {
        let path = PathBuf::from("/definitely/not/home/path");
        assert_eq!(display_path(&path), "/definitely/not/home/path");
    }

    #[test]
    fn test_format_last_used_never() {
        assert_eq!(
            format_last_used(DateTime::<Utc>::UNIX_EPOCH, fixed_time()),
            "never"
        );
    }

    #[test]
    fn test_format_last_used_hours_ago() {
        let now = fixed_time();
        let text = format_last_used(now - Duration::hours(3), now);
        assert!(text.contains("3 hours"), "unexpected: {text}");
        assert!(text.contains("ago"), "unexpected: {text}");
    }

    #[test]
    fn test_format_used_count() {
        assert_eq!(format_used_count(0), "used 0 times");
        assert_eq!(format_used_count(1), "used 1 time");
        assert_eq!(format_used_count(7), "used 7 times");
    }

    #[test]
    fn test_table_aligns_columns() {
        let dir = tempfile::TempDir::new().unwrap();
        let short = Bookmark::new(dir.path().to_path_buf(), Utc::now());
        let long = Bookmark::new(dir.path().to_path_buf(), Utc::now());
        let entries = vec![("a", &short), ("longer-alias", &long)];

        let lines = format_bookmark_table(&entries, color::ColorMode::Never);
        assert_eq!(lines.len(), 2);

        let first_path_col = lines[0].find(&display_path(dir.path())).unwrap();
        let second_path_col = lines[1].find(&display_path(dir.path())).unwrap();
        assert_eq!(first_path_col, second_path_col);
    }

    #[test]
    fn test_is_missing_only_when_path_is_gone() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("notes.txt");
        fs::write(&file, "").unwrap();

        assert!(!Bookmark::new(dir.path().to_path_buf(), Utc::now()).is_missing());
        assert!(!Bookmark::new(file, Utc::now()).is_missing());
        assert!(Bookmark::new(dir.path().join("gone"), Utc::now()).is_missing());
    }

    #[test]
    fn test_table_marks_missing_directories() {
        let dir = tempfile::TempDir::new().unwrap();
        let present = Bookmark::new(dir.path().to_path_buf(), Utc::now());
        let missing = Bookmark::new(dir.path().join("gone"), Utc::now());
        let entries = vec![("here", &present), ("gone", &missing)];

        let lines = format_bookmark_table(&entries, color::ColorMode::Never);
        assert!(lines[0].starts_with("  here"));
        assert!(lines[1].starts_with("✗ gone"));
        assert!(lines[1].ends_with("missing"));
    }

    #[test]
    fn test_table_never_mode_has_no_ansi() {
        let dir = tempfile::TempDir::new().unwrap();
        let bookmark = Bookmark::new(dir.path().to_path_buf(), Utc::now());
        let lines = format_bookmark_table(&[("proj", &bookmark)], color::ColorMode::Never);
        assert!(!lines[0].contains('\x1b'));
    }

    #[test]
    fn test_table_always_mode_has_ansi() {
        let dir = tempfile::TempDir::new().unwrap();
        let bookmark = Bookmark::new(dir.path().to_path_buf(), Utc::now());
        let lines = format_bookmark_table(&[("proj", &bookmark)], color::ColorMode::Always);
        assert!(lines[0].contains('\x1b'));
    }
}
