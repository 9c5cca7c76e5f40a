// Command handlers module
// This module contains all CLI command implementations

pub mod cd;
pub mod cleanup;
pub mod common;
pub mod completion;
pub mod edit;
pub mod init;
pub mod list;
pub mod path;
pub mod recent;
pub mod rm;
pub mod save;
pub mod search;
pub mod shell_init;
