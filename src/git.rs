//! Git command runner and commit queries for tagdiff.
//!
//! Provides a wrapper around git commands with captured stdout/stderr and
//! structured error handling. Every query tagdiff makes against the
//! repository goes through this module.

use crate::error::{Result, TagdiffError};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::debug;

/// Field separator used in `git log --format` strings.
pub const AUTHOR_FIELD_SEP: char = '\x1f';

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Returns stdout lines as a vector.
    pub fn lines(&self) -> Vec<&str> {
        if self.stdout.is_empty() {
            Vec::new()
        } else {
            self.stdout.lines().collect()
        }
    }
}

/// Run a git command with the specified working directory.
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(TagdiffError::GitError)` - On spawn failure or non-zero exit code
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let output = run_git_raw(cwd, args)?;
    Ok(GitOutput::from_output(&output))
}

/// Like [`run_git`], but stdout is returned as raw bytes, untrimmed.
pub fn run_git_raw<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<Output> {
    let cwd = cwd.as_ref();
    debug!(?args, cwd = %cwd.display(), "running git");

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            TagdiffError::GitError(format!(
                "failed to execute git {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    if output.status.success() {
        return Ok(output);
    }

    let git_output = GitOutput::from_output(&output);
    let exit_code = output.status.code().unwrap_or(-1);
    let error_msg = if git_output.stderr.is_empty() {
        git_output.stdout
    } else {
        git_output.stderr
    };

    Err(TagdiffError::GitError(format!(
        "git {} failed (exit code {}): {}",
        args.first().unwrap_or(&""),
        exit_code,
        error_msg
    )))
}

/// Get the repository root directory using `git rev-parse --show-toplevel`.
///
/// Outside a repository this is a `UserError` (exit 1) rather than a
/// `GitError`, since the fix is to run the command somewhere else.
pub fn get_repo_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    match run_git(cwd, &["rev-parse", "--show-toplevel"]) {
        Ok(output) => Ok(PathBuf::from(&output.stdout)),
        Err(TagdiffError::GitError(msg)) if msg.contains("not a git repository") => {
            Err(TagdiffError::UserError(
                "not inside a git repository. Run this command from within a git repository."
                    .to_string(),
            ))
        }
        Err(e) => Err(e),
    }
}

/// Full hash of `rev`.
pub fn resolve_commit<P: AsRef<Path>>(cwd: P, rev: &str) -> Result<String> {
    let spec = format!("{}^{{commit}}", rev);
    let output = run_git(cwd, &["rev-parse", "--verify", &spec])?;
    Ok(output.stdout)
}

/// Unified diff of `rev` against its parent with one line of context.
///
/// The commit header is suppressed with an empty `--format`, so the output
/// starts at the first `diff --git` line. The end is not trimmed; trailing
/// whitespace on the last added line belongs to its text.
pub fn commit_diff<P: AsRef<Path>>(cwd: P, rev: &str) -> Result<String> {
    let output = run_git_raw(cwd, &["show", "--unified=1", "--format=", "--no-color", rev])?;
    let diff = String::from_utf8_lossy(&output.stdout);
    Ok(diff.trim_start_matches('\n').to_string())
}

/// Contents of `path` as of `rev`, or `None` if `rev` has no such file.
///
/// `path` is repo-relative. Gitlinks (submodules) count as absent.
pub fn file_at<P: AsRef<Path>>(cwd: P, rev: &str, path: &str) -> Result<Option<Vec<u8>>> {
    let cwd = cwd.as_ref();

    // Format: "<mode> <type> <object>\t<path>\0"
    let listing = run_git_raw(cwd, &["ls-tree", "-z", rev, "--", path])?;
    let is_blob = listing
        .stdout
        .split(|&b| b == 0)
        .filter_map(|entry| std::str::from_utf8(entry).ok())
        .any(|entry| match entry.split_once('\t') {
            Some((meta, name)) => name == path && meta.split(' ').nth(1) == Some("blob"),
            None => false,
        });
    if !is_blob {
        return Ok(None);
    }

    let object = format!("{}:{}", rev, path);
    let output = run_git_raw(cwd, &["cat-file", "blob", &object])?;
    Ok(Some(output.stdout))
}

/// Author name, email and unix timestamp of `rev`, separated by
/// [`AUTHOR_FIELD_SEP`].
pub fn author_line<P: AsRef<Path>>(cwd: P, rev: &str) -> Result<String> {
    let output = run_git(cwd, &["log", "-1", "--format=%an%x1f%ae%x1f%at", rev])?;
    Ok(output.stdout)
}

/// Returns true if a remote named `remote` is configured.
pub fn remote_exists<P: AsRef<Path>>(cwd: P, remote: &str) -> Result<bool> {
    let remotes = run_git(cwd, &["remote"])?;
    Ok(remotes.lines().contains(&remote))
}

/// Output of `git remote show -n <remote>` (no network access).
pub fn remote_show<P: AsRef<Path>>(cwd: P, remote: &str) -> Result<String> {
    let output = run_git(cwd, &["remote", "show", "-n", remote])?;
    Ok(output.stdout)
}

/// Default branch of `remote`, falling back to the current branch.
///
/// Reads `refs/remotes/<remote>/HEAD`; clones have it, repositories whose
/// remote was added by hand usually don't.
pub fn default_branch<P: AsRef<Path>>(cwd: P, remote: &str) -> Result<String> {
    let cwd = cwd.as_ref();
    let remote_head = format!("refs/remotes/{}/HEAD", remote);

    match run_git(cwd, &["symbolic-ref", "--short", &remote_head]) {
        Ok(output) => {
            let prefix = format!("{}/", remote);
            Ok(output
                .stdout
                .strip_prefix(&prefix)
                .unwrap_or(&output.stdout)
                .to_string())
        }
        Err(e) => {
            debug!(error = %e, "remote HEAD not set, using current branch");
            let output = run_git(cwd, &["rev-parse", "--abbrev-ref", "HEAD"])?;
            Ok(output.stdout)
        }
    }
}
