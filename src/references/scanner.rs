//! Reference scanning over added lines.

use super::patterns::{CALL_PATTERN, DEFAULT_IGNORE, MARKUP_PATTERN};
use super::types::{ReferenceHit, ReferenceKind};
use crate::config::Config;
use crate::diff::Hunk;
use crate::error::{Result, TagdiffError};
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

/// Compiled reference patterns plus the set of tokens to drop.
///
/// Immutable once built. Create once per run and reuse for every line.
#[derive(Debug)]
pub struct ReferenceScanner {
    call: Regex,
    markup: Regex,
    ignore: HashSet<String>,
}

impl ReferenceScanner {
    /// Scanner with the built-in ignore list.
    pub fn new() -> Result<Self> {
        Self::with_ignore(DEFAULT_IGNORE.iter().copied())
    }

    /// Scanner with exactly the given ignore list.
    pub fn with_ignore<I, S>(ignore: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            call: compile(CALL_PATTERN)?,
            markup: compile(MARKUP_PATTERN)?,
            ignore: ignore.into_iter().map(Into::into).collect(),
        })
    }

    /// Scanner with the built-in ignore list extended by `extra_ignore`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let ignore = DEFAULT_IGNORE
            .iter()
            .map(|s| s.to_string())
            .chain(config.extra_ignore.iter().cloned());
        Self::with_ignore(ignore)
    }

    /// Returns true if `token` is dropped by this scanner.
    pub fn is_ignored(&self, token: &str) -> bool {
        self.ignore.contains(token)
    }

    /// Candidate references on one line of text.
    ///
    /// Every call-like match is returned, in order, followed by at most one
    /// markup-like match (the first `<Capitalized` on the line).
    pub fn scan_line(&self, text: &str) -> Vec<(ReferenceKind, String)> {
        let mut found = Vec::new();

        for caps in self.call.captures_iter(text) {
            if let Some(name) = caps.get(1).map(|m| m.as_str()) {
                if !name.is_empty() && !self.is_ignored(name) {
                    found.push((ReferenceKind::Call, name.to_string()));
                }
            }
        }

        if let Some(name) = self
            .markup
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
        {
            if !name.is_empty() && !self.is_ignored(name) {
                found.push((ReferenceKind::Markup, name.to_string()));
            }
        }

        found
    }

    /// Scan the added lines of every hunk.
    ///
    /// Removed and context lines are never looked at. Duplicates across
    /// lines are kept.
    pub fn scan(&self, hunks: &[Hunk]) -> Vec<ReferenceHit> {
        let mut hits = Vec::new();

        for hunk in hunks {
            for line in &hunk.new_lines {
                for (kind, name) in self.scan_line(&line.text) {
                    hits.push(ReferenceHit {
                        file: hunk.filename.clone(),
                        line: line.num,
                        name,
                        kind,
                    });
                }
            }
        }

        debug!(hits = hits.len(), "scanned added lines for references");
        hits
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| {
        TagdiffError::UserError(format!("invalid reference pattern '{}': {}", pattern, e))
    })
}
