//! Commit metadata used to label events.
//!
//! Gathers author, commit link, branch and remote for one commit. Any
//! missing piece is fatal: events without an author or link are useless to
//! the feed.

use crate::config::Config;
use crate::error::{Result, TagdiffError};
use crate::git::{self, AUTHOR_FIELD_SEP};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// Metadata of the commit being described.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitMetadata {
    /// Author name exactly as recorded by git.
    pub author_name: String,
    /// First whitespace-separated word of `author_name`.
    pub author_first_name: String,
    pub author_email: String,
    pub commit_hash: String,
    /// Web link to the commit.
    pub commit_url: String,
    /// Default branch of the remote.
    pub branch: String,
    /// Remote in `host/path` form, e.g. `github.com/owner/repo`.
    pub remote_url: String,
    /// Author time.
    pub time: DateTime<Utc>,
}

/// Author fields parsed from a `%an<sep>%ae<sep>%at` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorInfo {
    pub name: String,
    pub email: String,
    pub time: DateTime<Utc>,
}

impl CommitMetadata {
    /// Query git for the metadata of `rev`.
    ///
    /// # Returns
    ///
    /// * `Ok(CommitMetadata)` - All fields resolved
    /// * `Err(TagdiffError::GitError)` - A git query failed
    /// * `Err(TagdiffError::MetadataError)` - The remote is missing, or some
    ///   output did not have the expected shape
    pub fn collect<P: AsRef<Path>>(repo_root: P, config: &Config, rev: &str) -> Result<Self> {
        let repo_root = repo_root.as_ref();

        let commit_hash = git::resolve_commit(repo_root, rev)?;
        let author = parse_author_line(&git::author_line(repo_root, &commit_hash)?)?;

        if !git::remote_exists(repo_root, &config.remote)? {
            return Err(TagdiffError::MetadataError(format!(
                "remote '{}' does not exist.\n\n\
                 To fix this, either:\n\
                 1. Set a different remote in {} (remote: <name>)\n\
                 2. Add the remote: git remote add {} <url>",
                config.remote,
                crate::config::DEFAULT_CONFIG_FILE,
                config.remote
            )));
        }
        let fetch_url = parse_fetch_url(&git::remote_show(repo_root, &config.remote)?)?;
        let remote_url = display_remote_url(&fetch_url);
        let branch = git::default_branch(repo_root, &config.remote)?;
        let commit_url = commit_url(&config.web_scheme, &remote_url, &commit_hash);

        debug!(commit = %commit_hash, %branch, remote = %remote_url, "collected commit metadata");

        Ok(Self {
            author_first_name: first_name(&author.name).to_string(),
            author_name: author.name,
            author_email: author.email,
            commit_hash,
            commit_url,
            branch,
            remote_url,
            time: author.time,
        })
    }
}

/// Parse the author line produced by [`git::author_line`].
///
/// The line must split into exactly three fields: name, email, unix time.
pub fn parse_author_line(line: &str) -> Result<AuthorInfo> {
    let fields: Vec<&str> = line.split(AUTHOR_FIELD_SEP).collect();
    let [name, email, timestamp] = fields.as_slice() else {
        return Err(TagdiffError::MetadataError(format!(
            "author line has {} fields, expected 3 (name, email, time): {:?}",
            fields.len(),
            line
        )));
    };

    if name.trim().is_empty() {
        return Err(TagdiffError::MetadataError(format!(
            "author name is empty in author line {:?}",
            line
        )));
    }

    let seconds: i64 = timestamp.trim().parse().map_err(|_| {
        TagdiffError::MetadataError(format!("invalid author timestamp {:?}", timestamp))
    })?;
    let time = DateTime::<Utc>::from_timestamp(seconds, 0).ok_or_else(|| {
        TagdiffError::MetadataError(format!("author timestamp out of range: {}", seconds))
    })?;

    Ok(AuthorInfo {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        time,
    })
}

/// First whitespace-separated word of a name.
pub fn first_name(full_name: &str) -> &str {
    full_name.split_whitespace().next().unwrap_or(full_name)
}

/// Extract the `Fetch URL:` value from `git remote show -n` output.
pub fn parse_fetch_url(remote_show: &str) -> Result<String> {
    let pattern = Regex::new(r"(?m)^\s*Fetch URL:\s*(\S+)\s*$").map_err(|e| {
        TagdiffError::MetadataError(format!("invalid fetch URL pattern: {}", e))
    })?;

    pattern
        .captures(remote_show)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| {
            TagdiffError::MetadataError(format!(
                "no 'Fetch URL:' line in remote description:\n{}",
                remote_show
            ))
        })
}

/// Normalize a fetch URL to `host/path`.
///
/// Handles `scheme://[user@]host/path`, scp-style `[user@]host:path` and
/// strips a trailing `.git` or `/`. Local paths are returned trimmed.
pub fn display_remote_url(fetch_url: &str) -> String {
    let url = fetch_url.trim();

    let without_scheme = match url.split_once("://") {
        Some((_, rest)) => rest.to_string(),
        None => match url.split_once(':') {
            // scp-style: the colon comes before any slash
            Some((host, path)) if !host.contains('/') => format!("{}/{}", host, path),
            _ => url.to_string(),
        },
    };

    let without_user = match without_scheme.split_once('@') {
        Some((user, rest)) if !user.contains('/') => rest.to_string(),
        _ => without_scheme,
    };

    let trimmed = without_user.trim_end_matches('/');
    trimmed.strip_suffix(".git").unwrap_or(trimmed).to_string()
}

/// Web link to a commit on the remote.
pub fn commit_url(scheme: &str, remote_url: &str, commit_hash: &str) -> String {
    format!(
        "{}://{}/commit/{}",
        scheme,
        remote_url.trim_start_matches('/'),
        commit_hash
    )
}
