//! Implementation of the `tagdiff hunks` command.
//!
//! Prints the hunks parsed from a commit's diff, for inspecting what the
//! correlation step will see.

use super::{resolve_repo_root, to_json};
use crate::cli::HunksArgs;
use crate::diff::{Hunk, parse_unified_diff};
use crate::error::Result;
use crate::git;
use std::path::Path;
use tracing::info;

/// Execute the `tagdiff hunks` command.
pub fn cmd_hunks(args: HunksArgs) -> Result<()> {
    let repo_root = resolve_repo_root(args.repo.repo.as_deref())?;
    let hunks = commit_hunks(&repo_root, &args.repo.commit)?;
    println!("{}", to_json(&hunks, args.repo.pretty)?);
    Ok(())
}

/// Parsed hunks of `rev`.
pub(crate) fn commit_hunks(repo_root: &Path, rev: &str) -> Result<Vec<Hunk>> {
    let diff = git::commit_diff(repo_root, rev)?;
    let hunks = parse_unified_diff(&diff);
    info!(commit = %rev, hunks = hunks.len(), "parsed commit diff");
    Ok(hunks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::create_test_repo;

    #[test]
    fn test_commit_hunks_head() {
        let temp = create_test_repo();

        let hunks = commit_hunks(temp.path(), "HEAD").unwrap();

        assert_eq!(hunks.len(), 1);
        let hunk = &hunks[0];
        assert_eq!(hunk.filename, "main.go");
        assert_eq!((hunk.old_start, hunk.new_start), (5, 5));
        let added: Vec<&str> = hunk.new_lines.iter().map(|l| l.text.as_str()).collect();
        assert!(added.contains(&"\ty := x * 3"));
        assert!(added.contains(&"\tlogValue(y)"));
    }

    #[test]
    fn test_commit_hunks_bad_rev() {
        let temp = create_test_repo();
        let err = commit_hunks(temp.path(), "no-such-rev").unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
