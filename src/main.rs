use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use repokit::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();

    match repokit::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("{} {:#}", "error:".bold().red(), err);
            ExitStatus::Error.into()
        }
    }
}
