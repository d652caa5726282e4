//! Tagdiff: turn a commit into symbol-level change events.
//!
//! This is the main entry point for the `tagdiff` CLI. It parses arguments,
//! sets up logging, dispatches to the appropriate command handler, and
//! handles errors with proper exit codes.

mod cli;
mod commands;
pub mod config;
pub mod correlate;
pub mod diff;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod git;
pub mod logging;
pub mod metadata;
pub mod references;
pub mod tags;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Nothing was written to stdout; the message goes to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
