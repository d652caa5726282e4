//! Structured diff records.

use serde::Serialize;

/// A single added or removed line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    /// Line number in the old (removed) or new (added) version, 1-based.
    pub num: i64,
    /// Line content without the leading `+` or `-` marker.
    pub text: String,
}

/// One contiguous block of change in one file.
///
/// `old_end = old_start + old_count - 1` and `new_end = new_start + new_count - 1`
/// with the counts taken from the hunk header. A side with a zero count keeps a
/// degenerate range, e.g. `+0,0` gives `new_start = 0`, `new_end = -1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hunk {
    /// Repository-relative path from the `a/` side of the file header.
    pub filename: String,
    pub old_start: i64,
    pub old_end: i64,
    /// Removed lines in order of appearance.
    pub old_lines: Vec<Line>,
    pub new_start: i64,
    pub new_end: i64,
    /// Added lines in order of appearance.
    pub new_lines: Vec<Line>,
}

/// Parsed numbers of a `@@ -a,b +c,d @@` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HunkHeader {
    pub old_start: i64,
    pub old_count: i64,
    pub new_start: i64,
    pub new_count: i64,
}

impl Hunk {
    /// Create an empty hunk for `filename` from a parsed header.
    pub fn from_header(filename: impl Into<String>, header: HunkHeader) -> Self {
        Self {
            filename: filename.into(),
            old_start: header.old_start,
            old_end: header.old_start + header.old_count - 1,
            old_lines: Vec::new(),
            new_start: header.new_start,
            new_end: header.new_start + header.new_count - 1,
            new_lines: Vec::new(),
        }
    }
}
