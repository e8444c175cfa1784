use std::env;

use anyhow::{Context, Result};

use super::super::args::BumpCommand;
use super::{CommandResult, CommandSummary};
use crate::{
    config::load_config,
    version::{BumpClass, bump_all},
};

pub fn bump(cmd: BumpCommand) -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to determine working directory")?;
    let class: BumpClass = cmd.class.parse()?;
    let loaded = load_config(&cwd)?;

    let summary = bump_all(&loaded.root, &loaded.config.bump, class, cmd.dry_run);

    Ok(CommandResult {
        summary: CommandSummary::Bump(summary),
        cwd,
    })
}
