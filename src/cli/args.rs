//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `bump`: Bump the version of every configured `package.json`
//! - `check`: Report translation keys missing from the locale files
//! - `init`: Initialize a repokit configuration file

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
            Some(Command::Bump(cmd)) => cmd.common.verbose,
            Some(Command::Check(cmd)) => cmd.common.verbose,
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

#[derive(Debug, Args)]
pub struct BumpCommand {
    /// Release type: patch, minor or major
    #[arg(default_value = "patch")]
    pub class: String,

    /// Print the new versions without writing any manifest
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<String>,

    /// Locale resources directory (overrides config file)
    #[arg(long)]
    pub locales_root: Option<String>,

    /// Results file path (overrides config file)
    #[arg(long)]
    pub output: Option<String>,

    /// Also report keys defined in locale files but never used in source
    #[arg(long)]
    pub unused: bool,

    /// Exit with status 1 when any translation is missing
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Bump the version of every configured package.json in lockstep
    Bump(BumpCommand),
    /// Check for translation keys used in source but missing from locale files
    Check(CheckCommand),
    /// Initialize a new .repokitrc.json configuration file
    Init,
}
