//! Terminal color handling
//!
//! stdout carries paths for the shell function to `cd` into, so it is never
//! colored unless explicitly requested for table output. Messages, tables
//! and suggestions written to stderr follow [`ColorMode`].

use std::env;
use std::fmt;
use std::str::FromStr;

use owo_colors::OwoColorize;

/// Color mode for terminal output
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Default)]
pub enum ColorMode {
    /// Always use colors
    Always,
    /// Automatically detect whether to use colors
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl FromStr for ColorMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "always" => Ok(Self::Always),
            "auto" => Ok(Self::Auto),
            "never" => Ok(Self::Never),
            _ => anyhow::bail!("Invalid color mode: {s}. Expected one of: always, auto, never"),
        }
    }
}

impl ColorMode {
    /// Resolve color mode from CLI flag and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. CLI flag (`--color=always|auto|never`)
    /// 2. `NO_COLOR` environment variable
    /// 3. `TERM=dumb` environment variable
    /// 4. Default (Auto)
    #[must_use]
    pub fn resolve(cli_mode: Option<Self>) -> Self {
        if let Some(mode) = cli_mode {
            return mode;
        }

        if env::var_os("NO_COLOR").is_some() {
            return Self::Never;
        }

        if env::var("TERM").is_ok_and(|term| term == "dumb") {
            return Self::Never;
        }

        Self::Auto
    }

    /// Check if colors should be enabled for stderr output
    ///
    /// `Auto` defers to `supports-color`'s cached detection, which accounts
    /// for TTY status and platform ANSI support.
    #[must_use]
    pub fn should_colorize(self) -> bool {
        match self {
            Self::Always => true,
            Self::Auto => supports_color::on_cached(supports_color::Stream::Stderr).is_some(),
            Self::Never => false,
        }
    }

    fn paint(self, code: &str, text: &str) -> String {
        if self.should_colorize() {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }

    /// Colorize an alias name in yellow
    #[must_use]
    pub fn colorize_alias(self, text: &str) -> String {
        self.paint("33", text)
    }

    /// Colorize a directory path in cyan
    #[must_use]
    pub fn colorize_path(self, text: &str) -> String {
        self.paint("36", text)
    }

    /// Colorize an entry whose directory is gone in red
    #[must_use]
    pub fn colorize_missing(self, text: &str) -> String {
        self.paint("31", text)
    }

    /// Colorize a list index in green
    #[must_use]
    pub fn colorize_index(self, text: &str) -> String {
        self.paint("32", text)
    }

    /// Colorize secondary info (usage, timestamps) in gray
    #[must_use]
    pub fn colorize_secondary(self, text: &str) -> String {
        self.paint("90", text)
    }
}

/// Message style for different types of output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    /// Success message (green ✓)
    Success,
    /// Info message (cyan ℹ)
    Info,
    /// Warning message (yellow ⚠)
    Warn,
    /// Error message (red ✗)
    Error,
}

impl MessageStyle {
    const fn symbol(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Info => "ℹ",
            Self::Warn => "⚠",
            Self::Error => "✗",
        }
    }

    /// Format a message with this style
    #[allow(clippy::missing_const_for_fn)]
    pub fn format<D: fmt::Display>(self, mode: ColorMode, message: D) -> FormattedMessage<D> {
        FormattedMessage {
            style: self,
            mode,
            message,
        }
    }
}

/// A formatted message with color and symbol
pub struct FormattedMessage<D> {
    style: MessageStyle,
    mode: ColorMode,
    message: D,
}

impl<D: fmt::Display> fmt::Display for FormattedMessage<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.style.symbol();
        if !self.mode.should_colorize() {
            return write!(f, "{symbol} {}", self.message);
        }
        match self.style {
            MessageStyle::Success => write!(f, "{} {}", symbol.bright_green().bold(), self.message),
            MessageStyle::Info => write!(f, "{} {}", symbol.bright_cyan(), self.message),
            MessageStyle::Warn => write!(f, "{} {}", symbol.bright_yellow(), self.message),
            MessageStyle::Error => write!(f, "{} {}", symbol.bright_red().bold(), self.message),
        }
    }
}

/// Format a success message (green ✓)
pub fn success<D: fmt::Display>(mode: ColorMode, message: D) -> FormattedMessage<D> {
    MessageStyle::Success.format(mode, message)
}

/// Format an info message (cyan ℹ)
pub fn info<D: fmt::Display>(mode: ColorMode, message: D) -> FormattedMessage<D> {
    MessageStyle::Info.format(mode, message)
}

/// Format a warning message (yellow ⚠)
pub fn warn<D: fmt::Display>(mode: ColorMode, message: D) -> FormattedMessage<D> {
    MessageStyle::Warn.format(mode, message)
}

/// Format an error message (red ✗)
pub fn error<D: fmt::Display>(mode: ColorMode, message: D) -> FormattedMessage<D> {
    MessageStyle::Error.format(mode, message)
}

/// Dimmed text for secondary information
pub struct DimmedText<D> {
    mode: ColorMode,
    text: D,
}

impl<D: fmt::Display> fmt::Display for DimmedText<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mode.should_colorize() {
            write!(f, "{}", self.text.to_string().dimmed())
        } else {
            write!(f, "{}", self.text)
        }
    }
}

/// Dim text for secondary information (paths, hints)
#[allow(clippy::missing_const_for_fn)]
pub fn dim<D: fmt::Display>(mode: ColorMode, text: D) -> DimmedText<D> {
    DimmedText { mode, text }
}

/// Candidate line used for suggestions and ambiguous matches
///
/// Renders as `  alias -> path`.
pub struct CandidateLine<'a> {
    mode: ColorMode,
    alias: &'a str,
    path: &'a str,
}

impl fmt::Display for CandidateLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "  {} -> {}",
            self.mode.colorize_alias(self.alias),
            self.mode.colorize_path(self.path)
        )
    }
}

/// Format a candidate alias with its path
#[must_use]
pub const fn candidate<'a>(mode: ColorMode, alias: &'a str, path: &'a str) -> CandidateLine<'a> {
    CandidateLine { mode, alias, path }
}

/// Tree item formatting for nested output
pub struct TreeItem<D> {
    mode: ColorMode,
    message: D,
    is_last: bool,
}

impl<D: fmt::Display> fmt::Display for TreeItem<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let branch = if self.is_last { "└─" } else { "├─" };
        if self.mode.should_colorize() {
            write!(f, "  {} {}", branch.dimmed(), self.message)
        } else {
            write!(f, "  {branch} {}", self.message)
        }
    }
}

/// Format a tree item for nested output (e.g. removed aliases)
#[allow(clippy::missing_const_for_fn)]
pub fn tree_item<D: fmt::Display>(mode: ColorMode, message: D, is_last: bool) -> TreeItem<D> {
    TreeItem {
        mode,
        message,
        is_last,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_resolve_cli_flag_wins() {
        for mode in [ColorMode::Always, ColorMode::Auto, ColorMode::Never] {
            assert_eq!(ColorMode::resolve(Some(mode)), mode);
        }
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("ALWAYS".parse::<ColorMode>().unwrap(), ColorMode::Always);
        assert_eq!("Auto".parse::<ColorMode>().unwrap(), ColorMode::Auto);
        assert_eq!("NeVeR".parse::<ColorMode>().unwrap(), ColorMode::Never);
    }

    #[test]
    fn test_from_str_invalid() {
        let err = "sometimes".parse::<ColorMode>().unwrap_err();
        assert!(err.to_string().contains("Invalid color mode"));
    }

    #[test]
    #[serial]
    fn test_resolve_no_color_env() {
        temp_env::with_var("NO_COLOR", Some("1"), || {
            assert_eq!(ColorMode::resolve(None), ColorMode::Never);
        });
    }

    #[test]
    #[serial]
    fn test_resolve_term_dumb() {
        temp_env::with_vars([("TERM", Some("dumb")), ("NO_COLOR", None::<&str>)], || {
            assert_eq!(ColorMode::resolve(None), ColorMode::Never);
        });
    }

    #[test]
    #[serial]
    fn test_resolve_cli_overrides_no_color() {
        temp_env::with_var("NO_COLOR", Some("1"), || {
            assert_eq!(
                ColorMode::resolve(Some(ColorMode::Always)),
                ColorMode::Always
            );
        });
    }

    #[test]
    #[serial]
    fn test_resolve_default_auto() {
        temp_env::with_vars([("NO_COLOR", None::<&str>), ("TERM", None::<&str>)], || {
            assert_eq!(ColorMode::resolve(None), ColorMode::Auto);
        });
    }

    #[test]
    fn test_should_colorize_fixed_modes() {
        assert!(ColorMode::Always.should_colorize());
        assert!(!ColorMode::Never.should_colorize());
    }

    #[test]
    fn test_colorize_helpers_always() {
        let mode = ColorMode::Always;
        assert_eq!(mode.colorize_alias("proj"), "\x1b[33mproj\x1b[0m");
        assert_eq!(mode.colorize_path("/tmp"), "\x1b[36m/tmp\x1b[0m");
        assert_eq!(mode.colorize_missing("✗"), "\x1b[31m✗\x1b[0m");
        assert_eq!(mode.colorize_index("1."), "\x1b[32m1.\x1b[0m");
        assert_eq!(mode.colorize_secondary("never"), "\x1b[90mnever\x1b[0m");
    }

    #[test]
    fn test_colorize_helpers_never() {
        let mode = ColorMode::Never;
        assert_eq!(mode.colorize_alias("proj"), "proj");
        assert_eq!(mode.colorize_path("/tmp"), "/tmp");
        assert_eq!(mode.colorize_missing("✗"), "✗");
        assert_eq!(mode.colorize_index("1."), "1.");
        assert_eq!(mode.colorize_secondary("never"), "never");
    }

    #[test]
    fn test_messages_never() {
        assert_eq!(success(ColorMode::Never, "Saved").to_string(), "✓ Saved");
        assert_eq!(info(ColorMode::Never, "Nothing").to_string(), "ℹ Nothing");
        assert_eq!(warn(ColorMode::Never, "Careful").to_string(), "⚠ Careful");
        assert_eq!(error(ColorMode::Never, "Broken").to_string(), "✗ Broken");
    }

    #[test]
    fn test_success_message_always() {
        let output = success(ColorMode::Always, "Saved").to_string();
        assert!(output.contains('\x1b'));
        assert!(output.contains("Saved"));
    }

    #[test]
    fn test_dim_text() {
        assert_eq!(dim(ColorMode::Never, "hint").to_string(), "hint");
        assert!(dim(ColorMode::Always, "hint").to_string().contains('\x1b'));
    }

    #[test]
    fn test_candidate_line_never() {
        let line = candidate(ColorMode::Never, "proj", "~/src/proj").to_string();
        assert_eq!(line, "  proj -> ~/src/proj");
    }

    #[test]
    fn test_tree_item_never() {
        assert_eq!(
            tree_item(ColorMode::Never, "old", false).to_string(),
            "  ├─ old"
        );
        assert_eq!(
            tree_item(ColorMode::Never, "older", true).to_string(),
            "  └─ older"
        );
    }
}
