use std::env;

use anyhow::{Context, Result};

use super::super::args::CheckCommand;
use super::{CheckSummary, CommandResult, CommandSummary};
use crate::{
    config::{ConfigLoadResult, load_config},
    translations::{AuditOptions, audit},
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to determine working directory")?;
    let ConfigLoadResult {
        mut config, root, ..
    } = load_config(&cwd)?;

    let translations = &mut config.translations;
    if let Some(source_root) = cmd.source_root {
        translations.source_root = source_root;
    }
    if let Some(locales_root) = cmd.locales_root {
        translations.locales_root = locales_root;
    }
    if let Some(output) = cmd.output {
        translations.output = output;
    }

    let options = AuditOptions {
        include_unused: cmd.unused,
    };
    let result = audit(&root, translations, options)?;
    result.report.write(&result.output_path)?;

    Ok(CommandResult {
        summary: CommandSummary::Check(CheckSummary {
            audit: result,
            strict: cmd.strict,
        }),
        cwd,
    })
}
