//! Command-line interface layer.
//!
//! - `args`: clap argument definitions
//! - `commands`: `check`, `fix` and `init`
//! - `actions`: Issue → file operation conversion for `fix`
//! - `report`: cargo-style issue output
//! - `exit_status`: process exit codes

pub mod actions;
pub mod args;
pub mod commands;
pub mod exit_status;
pub mod report;

use anyhow::Result;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match args.command {
        Some(Command::Check(cmd)) => commands::check::check(cmd, verbose),
        Some(Command::Fix(cmd)) => commands::fix::fix(cmd, verbose),
        Some(Command::Init) => commands::init::init(),
        None => Ok(ExitStatus::Success),
    }
}
