//! Configuration schema and type definitions

use serde::{Deserialize, Serialize};

/// Configuration for fast-nav
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub navigate: NavigateConfig,
    #[serde(default)]
    pub recent: RecentConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Where bookmarks are kept
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Bookmarks file; a leading `~` expands to the home directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

/// Approximate matching settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigateConfig {
    /// Maximum edit distance for typo suggestions
    #[serde(default = "default_max_distance")]
    pub max_distance: usize,
    /// How many matches or suggestions to show
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,
}

impl Default for NavigateConfig {
    fn default() -> Self {
        Self {
            max_distance: default_max_distance(),
            max_candidates: default_max_candidates(),
        }
    }
}

const fn default_max_distance() -> usize {
    3
}

const fn default_max_candidates() -> usize {
    5
}

/// `recent` command settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentConfig {
    /// Entries listed and selectable by index
    #[serde(default = "default_recent_limit")]
    pub limit: usize,
}

impl Default for RecentConfig {
    fn default() -> Self {
        Self {
            limit: default_recent_limit(),
        }
    }
}

const fn default_recent_limit() -> usize {
    9
}

/// Diagnostic logging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive, e.g. `warn` or `fast_nav=debug`
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    crate::logging::DEFAULT_LEVEL.to_string()
}

/// Template written by `init`
const TEMPLATE: &str = r#"# fast-nav configuration
# Location: ~/.config/fast-nav/config.toml

[storage]
# Bookmarks file (a leading ~ expands to your home directory)
# The FN_BOOKMARKS_FILE environment variable takes precedence.
# file = "~/.fn/bookmarks.json"

[navigate]
# Maximum number of character edits for "did you mean" suggestions
max_distance = 3
# Number of matches or suggestions shown when an alias is not exact
max_candidates = 5

[recent]
# Bookmarks listed by `fn recent` and reachable as `fn recent <index>`
limit = 9

[log]
# Log filter written to stderr (trace, debug, info, warn, error)
# The FN_LOG environment variable takes precedence.
level = "warn"
"#;

impl Config {
    /// Commented configuration template
    #[must_use]
    pub const fn template() -> &'static str {
        TEMPLATE
    }
}
