use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::env::CompleteEnv;

use fast_nav::cli::{Cli, Commands};
use fast_nav::color::ColorMode;
use fast_nav::commands;
use fast_nav::config::Config;
use fast_nav::logging;

/// Load configuration and start logging for commands that touch the store
///
/// Shell setup commands skip this so they keep working with a broken config.
fn setup(color_mode: ColorMode) -> Result<Config> {
    let config = Config::load()?;
    logging::init(&config.log.level, color_mode.should_colorize());
    Ok(config)
}

fn main() -> Result<()> {
    // Handle dynamic completion via COMPLETE environment variable.
    // Completions are registered for the `fn` shell function.
    CompleteEnv::with_factory(Cli::command)
        .bin("fn")
        .completer("fast-nav")
        .complete();

    let cli = Cli::parse();

    // Resolve color mode from CLI flag and environment variables
    let color_mode = ColorMode::resolve(cli.color);

    match cli.command {
        None => match cli.alias {
            Some(alias) => commands::cd::cmd_navigate(&alias, &setup(color_mode)?, color_mode),
            None => {
                Cli::command().print_help()?;
                Ok(())
            }
        },
        Some(Commands::Navigate { alias }) => {
            commands::cd::cmd_navigate(&alias, &setup(color_mode)?, color_mode)
        }
        Some(Commands::Save { alias }) => {
            commands::save::cmd_save(&alias, &setup(color_mode)?, color_mode)
        }
        Some(Commands::Edit { alias }) => {
            commands::edit::cmd_edit(&alias, &setup(color_mode)?, color_mode)
        }
        Some(Commands::Delete { alias, yes }) => {
            commands::rm::cmd_delete(&alias, yes, &setup(color_mode)?, color_mode)
        }
        Some(Commands::Path { alias }) => commands::path::cmd_path(&alias, &setup(color_mode)?),
        Some(Commands::List { long }) => {
            commands::list::cmd_list(long, &setup(color_mode)?, color_mode)
        }
        Some(Commands::Search { pattern, long }) => {
            commands::search::cmd_search(&pattern, long, &setup(color_mode)?, color_mode)
        }
        Some(Commands::Recent { index }) => {
            commands::recent::cmd_recent(index, &setup(color_mode)?, color_mode)
        }
        Some(Commands::Cleanup) => commands::cleanup::cmd_cleanup(&setup(color_mode)?, color_mode),
        Some(Commands::Init { force }) => commands::init::cmd_init(force, color_mode),
        Some(Commands::Completion { shell }) => commands::completion::cmd_completion(&shell),
        Some(Commands::ShellInit { shell }) => commands::shell_init::cmd_shell_init(&shell),
    }
}
