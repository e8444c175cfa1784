use std::path::PathBuf;

use super::super::exit_status::ExitStatus;
use crate::{translations::AuditResult, version::BumpSummary};

#[derive(Debug)]
pub struct CheckSummary {
    pub audit: AuditResult,
    /// Fail the run when anything is missing.
    pub strict: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub config_path: PathBuf,
}

#[derive(Debug)]
pub enum CommandSummary {
    Bump(BumpSummary),
    Check(CheckSummary),
    Init(InitSummary),
}

/// Result of running repokit commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Directory paths are displayed relative to.
    pub cwd: PathBuf,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Bump(summary) if summary.failure.is_some() => ExitStatus::Error,
            CommandSummary::Check(summary)
                if summary.strict && summary.audit.report.missing_count() > 0 =>
            {
                ExitStatus::Failure
            }
            _ => ExitStatus::Success,
        }
    }
}
