//! Report formatting and printing utilities.
//!
//! Commands return plain data; everything the user sees on the terminal is
//! produced here. Separate from core logic to allow repokit to be used as a
//! library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CheckSummary, CommandResult, CommandSummary, InitSummary};
use crate::{
    translations::ResourceWarning,
    utils::{display_path, pluralize},
    version::BumpSummary,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result to stdout/stderr.
pub fn print(result: &CommandResult, verbose: bool) {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

/// Print a command result to custom writers.
///
/// Useful for testing or redirecting output.
pub fn print_to<W: Write, E: Write>(result: &CommandResult, verbose: bool, out: &mut W, err: &mut E) {
    match &result.summary {
        CommandSummary::Bump(summary) => print_bump(summary, result, out, err),
        CommandSummary::Check(summary) => print_check(summary, result, verbose, out, err),
        CommandSummary::Init(summary) => print_init(summary, result, out),
    }
}

fn print_bump<W: Write, E: Write>(
    summary: &BumpSummary,
    result: &CommandResult,
    out: &mut W,
    err: &mut E,
) {
    let verb = if summary.is_dry_run {
        "Would update"
    } else {
        "Updated"
    };

    for update in &summary.updates {
        let _ = writeln!(
            out,
            "{} {} from {} to {}",
            verb,
            display_path(&update.path, &result.cwd),
            update.old_version,
            update.new_version
        );
    }

    if let Some(failure) = &summary.failure {
        let _ = writeln!(
            err,
            "{} failed to bump {}: {}",
            "error:".bold().red(),
            display_path(&failure.dir, &result.cwd),
            failure.error
        );
    }
}

fn print_check<W: Write, E: Write>(
    summary: &CheckSummary,
    result: &CommandResult,
    verbose: bool,
    out: &mut W,
    err: &mut E,
) {
    let audit = &summary.audit;

    for warning in &audit.warnings {
        print_resource_warning(warning, err);
    }

    let files = audit.source_files_checked;
    let keys = audit.used_keys.len();
    let missing = audit.report.missing_count();
    let checked = format!(
        "Checked {} source {}, {} translation {}",
        files,
        pluralize(files, "file", "files"),
        keys,
        pluralize(keys, "key", "keys"),
    );

    if missing == 0 {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("{} - no missing translations", checked).green()
        );
    } else {
        let _ = writeln!(
            out,
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "{} - {} missing {}",
                checked,
                missing,
                pluralize(missing, "translation", "translations")
            )
            .red()
        );
    }

    if verbose {
        for findings in &audit.report.languages {
            for (namespace, keys) in &findings.missing {
                for key in keys {
                    let _ = writeln!(
                        out,
                        "  {}: {}",
                        format!("{}/{}", findings.language, namespace).cyan(),
                        key
                    );
                }
            }
        }
    }

    if audit.report.include_unused {
        let unused = audit.report.unused_count();
        let _ = writeln!(
            out,
            "{} unused translation {}",
            unused,
            pluralize(unused, "key", "keys")
        );
    }

    let _ = writeln!(
        out,
        "Results written to {}",
        display_path(&audit.output_path, &result.cwd)
    );
}

/// Print a warning about a resource file that could not be loaded.
pub fn print_resource_warning<E: Write>(warning: &ResourceWarning, err: &mut E) {
    let _ = writeln!(
        err,
        "{} failed to load {} {} translations: {}",
        "warning:".bold().yellow(),
        warning.language,
        warning.namespace,
        warning.error
    );
}

fn print_init<W: Write>(summary: &InitSummary, result: &CommandResult, out: &mut W) {
    let _ = writeln!(
        out,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", display_path(&summary.config_path, &result.cwd)).green()
    );
}
