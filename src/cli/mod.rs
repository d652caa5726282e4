//! CLI argument parsing for tagdiff.
//!
//! Uses clap derive macros for declarative argument definitions. Actual
//! implementations live in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Tagdiff: report which symbol definitions a commit touched.
///
/// Correlates the commit's unified diff with ctags output and prints a JSON
/// payload of change events and subscription updates on stdout.
#[derive(Parser, Debug)]
#[command(name = "tagdiff")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for tagdiff.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Emit change events for a commit.
    ///
    /// Parses the commit's diff, extracts tags for the changed files,
    /// reports modified symbols and references on added lines.
    Events(EventsArgs),

    /// Print the parsed hunks of a commit as JSON.
    Hunks(HunksArgs),
}

/// Arguments shared by commands that read a commit.
#[derive(Parser, Debug)]
pub struct RepoArgs {
    /// Directory inside the repository (default: current directory).
    #[arg(long, value_name = "DIR")]
    pub repo: Option<PathBuf>,

    /// Commit to describe.
    #[arg(long, default_value = "HEAD", value_name = "REV")]
    pub commit: String,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the `events` command.
#[derive(Parser, Debug)]
pub struct EventsArgs {
    #[command(flatten)]
    pub repo: RepoArgs,

    /// Config file (default: .tagdiff.yaml at the repository root).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip reference scanning; only modified-symbol events are emitted.
    #[arg(long)]
    pub no_refs: bool,
}

/// Arguments for the `hunks` command.
#[derive(Parser, Debug)]
pub struct HunksArgs {
    #[command(flatten)]
    pub repo: RepoArgs,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
