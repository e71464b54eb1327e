//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `merge`: Merge translations from a reference `.ts` file into targets
//! - `init`: Initialize tsmerge configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Merge(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct MergeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Reference .ts file to take translations from (overrides config file)
    #[arg(short, long, env = "TSMERGE_SOURCE")]
    pub source: Option<PathBuf>,

    /// Target .ts file to update in place (overrides config file)
    /// Can be specified multiple times: --target a.ts --target b.ts
    #[arg(short, long = "target")]
    pub targets: Vec<PathBuf>,

    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct MergeCommand {
    #[command(flatten)]
    pub args: MergeArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Merge translations from a reference .ts file into target .ts files
    Merge(MergeCommand),
    /// Initialize a new .tsmergerc.json configuration file
    Init,
}
