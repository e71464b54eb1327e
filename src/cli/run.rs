/// Main entry point for the tsmerge CLI.
///
/// Dispatches to the appropriate command handler based on the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with match counts and exit behavior
/// - `Err` if the command fails (e.g., unreadable file, bad config)
use super::{
    args::{Arguments, Command},
    commands::CommandResult,
    commands::{init::init, merge::merge},
};
use anyhow::Result;

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Merge(cmd)) => merge(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
