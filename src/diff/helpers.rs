//! Helper functions for diff header parsing.

use super::types::HunkHeader;

/// Parse the `a/` path from the remainder of a "diff --git" line.
///
/// Format: "a/<path> b/<path2>". The `a/` side names the file even for
/// renames, so events for a renamed file are keyed by its old path.
///
/// Git leaves paths with spaces unquoted, so when both sides name the same
/// path the line is split in the middle. Otherwise (a rename) the sides are
/// only separable when neither contains whitespace.
///
/// Returns None if the sides cannot be told apart, or for quoted paths.
pub(super) fn parse_diff_git_line(rest: &str) -> Option<String> {
    let rest = rest.strip_prefix("a/")?;

    if let Some(path) = same_path_sides(rest) {
        return Some(normalize_path(path));
    }

    let b_pos = rest.rfind(" b/")?;
    let a_path = &rest[..b_pos];
    let b_path = &rest[b_pos + 3..];

    if a_path.is_empty()
        || b_path.is_empty()
        || a_path.contains(char::is_whitespace)
        || b_path.contains(char::is_whitespace)
    {
        return None;
    }

    Some(normalize_path(a_path))
}

/// `<path> b/<path>` with identical sides yields `<path>`.
fn same_path_sides(rest: &str) -> Option<&str> {
    let half = rest.len().checked_sub(3)? / 2;
    let a_path = rest.get(..half)?;
    let b_path = rest.get(half..)?.strip_prefix(" b/")?;
    (!a_path.is_empty() && a_path == b_path).then_some(a_path)
}

/// Parse a hunk header line.
///
/// Format: "@@ -old_start,old_count +new_start,new_count @@", optionally
/// followed by a section heading. A missing count ("@@ -5 +5 @@") means 1.
///
/// Returns None if the line is not a well-formed header.
pub(super) fn parse_hunk_header(line: &str) -> Option<HunkHeader> {
    let line = line.strip_prefix("@@ ")?;
    let end_marker = line.find(" @@")?;
    let range_part = &line[..end_marker];

    let mut parts = range_part.split(' ');
    let old_part = parts.next()?.strip_prefix('-')?;
    let new_part = parts.next()?.strip_prefix('+')?;
    if parts.next().is_some() {
        return None;
    }

    let (old_start, old_count) = parse_range(old_part)?;
    let (new_start, new_count) = parse_range(new_part)?;

    Some(HunkHeader {
        old_start,
        old_count,
        new_start,
        new_count,
    })
}

/// Parse "start,count" or "start" into (start, count).
fn parse_range(range: &str) -> Option<(i64, i64)> {
    match range.split_once(',') {
        Some((start, count)) => Some((parse_number(start)?, parse_number(count)?)),
        None => Some((parse_number(range)?, 1)),
    }
}

fn parse_number(s: &str) -> Option<i64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Returns true for per-file metadata lines that carry no line content.
pub(super) fn is_metadata_line(line: &str) -> bool {
    line.starts_with("diff --git")
        || line.starts_with("index ")
        || line.starts_with("---")
        || line.starts_with("+++")
}

/// Normalize a file path to use forward slashes.
pub(super) fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
