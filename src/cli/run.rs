//! Dispatches to the appropriate command handler based on the parsed arguments.
//!
//! # Returns
//! - `Ok(CommandResult)` with everything the report layer prints
//! - `Err` if the command cannot run at all (bad config, unreadable source tree)
use super::{
    args::{Arguments, Command},
    commands::{CommandResult, bump::bump, check::check, init::init},
};
use anyhow::Result;

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Bump(cmd)) => bump(cmd),
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
