use std::{env, fs};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init() -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to determine working directory")?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(&config_path, default_config_json()? + "\n")
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    Ok(CommandResult {
        summary: CommandSummary::Init(InitSummary { config_path }),
        cwd,
    })
}
