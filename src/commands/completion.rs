//! Completion command - Generate shell completion setup instructions

use anyhow::Result;
use clap_complete::Shell;

/// Generate shell completion setup instructions
///
/// Completions are registered for the `fn` shell function and served by the
/// `fast-nav` binary through the `COMPLETE` environment variable.
///
/// # Errors
/// Returns an error if:
/// - Invalid shell specified
pub fn cmd_completion(shell: &str) -> Result<()> {
    let _ = shell.parse::<Shell>().map_err(|_| {
        anyhow::anyhow!("Invalid shell: {shell}. Supported shells: bash, zsh, fish")
    })?;

    let instructions = match shell {
        "bash" => {
            r"# fast-nav shell completion setup for Bash
# Add this to your ~/.bashrc (after the shell-init line):
source <(COMPLETE=bash fast-nav)
"
        }
        "zsh" => {
            r"# fast-nav shell completion setup for Zsh
# Add this to your ~/.zshrc (after the shell-init line):
source <(COMPLETE=zsh fast-nav)
"
        }
        "fish" => {
            r"# fast-nav shell completion setup for Fish
# Add this to your ~/.config/fish/config.fish (after the shell-init line):
source (COMPLETE=fish fast-nav | psub)
"
        }
        _ => {
            anyhow::bail!("Unsupported shell: {shell}");
        }
    };

    print!("{instructions}");

    Ok(())
}
