//! Incremental unified diff parser.

use super::helpers::{is_metadata_line, parse_diff_git_line, parse_hunk_header};
use super::types::{Hunk, Line};

/// A hunk that is still receiving lines, with the running line cursors.
#[derive(Debug)]
struct OpenHunk {
    hunk: Hunk,
    old_cursor: i64,
    new_cursor: i64,
}

/// Line-at-a-time parser for `git show --unified=1` output.
///
/// State is the current file, and the open hunk with its old/new cursors.
/// Cursors are unknown (no open hunk) right after a file header. Parsing is
/// lenient: lines that match nothing are skipped, as is everything under a
/// file header whose path cannot be parsed.
///
/// The new-line cursor of a fresh hunk starts at `new_end`, not `new_start`.
/// Added line numbers inherit that offset whenever a hunk spans more than
/// one new line.
#[derive(Debug, Default)]
pub struct DiffParser {
    filename: Option<String>,
    open: Option<OpenHunk>,
    hunks: Vec<Hunk>,
}

impl DiffParser {
    /// Create a parser with no file context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line of diff text (without its trailing newline).
    pub fn feed(&mut self, line: &str) {
        // Format: "diff --git a/path/to/file b/path/to/file"
        // Any file header ends the previous file. One whose path can't be
        // read leaves no file context, so its hunks are dropped.
        if let Some(rest) = line.strip_prefix("diff --git ") {
            self.close_hunk();
            self.filename = parse_diff_git_line(rest);
            return;
        }

        let Some(filename) = &self.filename else {
            return;
        };

        if is_metadata_line(line) {
            return;
        }

        if let Some(header) = parse_hunk_header(line) {
            let hunk = Hunk::from_header(filename.clone(), header);
            self.close_hunk();
            self.open = Some(OpenHunk {
                old_cursor: hunk.old_start,
                new_cursor: hunk.new_end,
                hunk,
            });
            return;
        }

        let Some(open) = self.open.as_mut() else {
            return;
        };

        if let Some(text) = line.strip_prefix('+') {
            open.hunk.new_lines.push(Line {
                num: open.new_cursor,
                text: text.to_string(),
            });
            open.new_cursor += 1;
        } else if let Some(text) = line.strip_prefix('-') {
            open.hunk.old_lines.push(Line {
                num: open.old_cursor,
                text: text.to_string(),
            });
            open.old_cursor += 1;
        } else {
            open.old_cursor += 1;
            open.new_cursor += 1;
        }
    }

    /// Close any open hunk and return all hunks in appearance order.
    pub fn finish(mut self) -> Vec<Hunk> {
        self.close_hunk();
        self.hunks
    }

    fn close_hunk(&mut self) {
        if let Some(open) = self.open.take() {
            self.hunks.push(open.hunk);
        }
    }
}

/// Parse raw unified diff text into hunks.
///
/// Hunks are ordered by file appearance, then hunk appearance. This never
/// fails: unrecognized lines are ignored.
pub fn parse_unified_diff(diff_output: &str) -> Vec<Hunk> {
    let mut parser = DiffParser::new();
    for line in diff_output.lines() {
        parser.feed(line);
    }
    parser.finish()
}

/// Distinct filenames of `hunks`, in first-appearance order.
pub fn changed_files(hunks: &[Hunk]) -> Vec<String> {
    let mut files: Vec<String> = Vec::new();
    for hunk in hunks {
        if !files.iter().any(|f| f == &hunk.filename) {
            files.push(hunk.filename.clone());
        }
    }
    files
}
