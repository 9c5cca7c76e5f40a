//! Alias validation
//!
//! Aliases are the keys of the bookmark container. They must be short,
//! shell-friendly, and must not shadow a subcommand of the CLI, since the
//! shell function dispatches `fn <word>` to a subcommand first.

use thiserror::Error;

/// Maximum alias length in characters
pub const MAX_ALIAS_LEN: usize = 50;

/// Words that cannot be used as aliases because they are subcommand names
pub const RESERVED_ALIASES: &[&str] = &[
    "save",
    "navigate",
    "list",
    "ls",
    "delete",
    "rm",
    "path",
    "edit",
    "search",
    "recent",
    "r",
    "cleanup",
    "init",
    "completion",
    "shell-init",
    "help",
];

/// Reasons an alias is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Alias must not be empty")]
    Empty,

    #[error("Alias '{alias}' is too long ({len} characters, maximum is {max})", max = MAX_ALIAS_LEN)]
    TooLong { alias: String, len: usize },

    #[error("Invalid alias '{alias}': use only alphanumeric characters, dash, and underscore")]
    InvalidCharacter { alias: String, found: char },

    #[error("'{alias}' is a reserved word and cannot be used as an alias")]
    Reserved { alias: String },
}

/// Check that an alias matches `^[a-zA-Z0-9_-]{1,50}$` and is not reserved
///
/// # Errors
/// Returns the first rule the alias breaks.
pub fn validate_alias(alias: &str) -> Result<(), ValidationError> {
    if alias.is_empty() {
        return Err(ValidationError::Empty);
    }

    if let Some(found) = alias
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(ValidationError::InvalidCharacter {
            alias: alias.to_string(),
            found,
        });
    }

    // Only ASCII remains at this point, so bytes == characters
    if alias.len() > MAX_ALIAS_LEN {
        return Err(ValidationError::TooLong {
            alias: alias.to_string(),
            len: alias.len(),
        });
    }

    if is_reserved(alias) {
        return Err(ValidationError::Reserved {
            alias: alias.to_string(),
        });
    }

    Ok(())
}

/// Whether the alias collides with a subcommand name
#[must_use]
pub fn is_reserved(alias: &str) -> bool {
    RESERVED_ALIASES.contains(&alias)
}
