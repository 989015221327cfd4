//! The `searchbench` command-line driver.

mod cli;
mod commands;
mod error;

use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;

use crate::cli::{Cli, Command};
use crate::error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Run(args) => commands::run(args).map(|_| ()),
        Command::List { problem_files } => commands::list(&problem_files),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::from(err.exit_code())
        }
    }
}

fn report(err: &CliError) {
    // Cancellation was already acknowledged by the console layer.
    if err.is_cancelled() {
        return;
    }
    eprintln!("{} {}", "error:".bright_red().bold(), err);
}
