//! Init command - Create the configuration file

use anyhow::{Context, Result};
use std::path::Path;

use crate::color;
use crate::config::Config;
use crate::domain::bookmark::display_path;

/// Write config file if it doesn't exist (or force overwrite)
fn write_config_if_needed(
    path: &Path,
    template: &str,
    force: bool,
    color_mode: color::ColorMode,
) -> Result<()> {
    if path.exists() && !force {
        eprintln!(
            "{}",
            color::warn(
                color_mode,
                format!("Config already exists: {}", display_path(path))
            )
        );
        eprintln!("Use --force to overwrite");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }

    std::fs::write(path, template)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;

    eprintln!(
        "{}",
        color::success(
            color_mode,
            format!("Created config: {}", display_path(path))
        )
    );
    Ok(())
}

/// Initialize the global configuration file
///
/// # Errors
/// Returns an error if:
/// - Global config path cannot be determined
/// - File write fails
pub fn cmd_init(force: bool, color_mode: color::ColorMode) -> Result<()> {
    let Some(path) = Config::global_config_path() else {
        anyhow::bail!(
            "Could not determine config path (HOME directory not found). \
             Please set the HOME environment variable or XDG_CONFIG_HOME."
        );
    };
    write_config_if_needed(&path, Config::template(), force, color_mode)
}
