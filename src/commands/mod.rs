//! Command implementations for tagdiff.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the helpers they share.

mod events;
mod hunks;

use crate::cli::Command;
use crate::error::{Result, TagdiffError};
use crate::git;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Events(args) => events::cmd_events(args),
        Command::Hunks(args) => hunks::cmd_hunks(args),
    }
}

/// Repository root for `--repo`, or for the current directory when absent.
pub(crate) fn resolve_repo_root(repo: Option<&Path>) -> Result<PathBuf> {
    let start = match repo {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().map_err(|e| {
            TagdiffError::UserError(format!("failed to read current directory: {}", e))
        })?,
    };
    if !start.is_dir() {
        return Err(TagdiffError::UserError(format!(
            "'{}' is not a directory",
            start.display()
        )));
    }
    git::get_repo_root(&start)
}

/// Serialize `value` as JSON, compact or pretty.
pub(crate) fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.map_err(|e| TagdiffError::UserError(format!("failed to serialize output: {}", e)))
}
