//! Overlap correlation between diff hunks and symbol tags.
//!
//! A tag covers `[tag.line, implicit_end]` where the implicit end comes from
//! the next tag in the index's global order (see [`SymbolIndex`]). A tag is
//! modified when that range intersects the new-side range of any hunk in the
//! same file.

use crate::diff::Hunk;
use crate::tags::{SymbolIndex, Tag};
use std::collections::HashMap;
use tracing::debug;

/// Returns true if `[start, end]` (end `None` = unbounded) intersects the
/// hunk's `[new_start, new_end]`.
pub fn overlaps(start: i64, end: Option<i64>, hunk: &Hunk) -> bool {
    let starts_after = end.is_some_and(|end| hunk.new_start > end);
    let ends_before = hunk.new_end < start;
    !(starts_after || ends_before)
}

/// Group hunks by filename, preserving hunk order within each file.
pub fn hunks_by_file(hunks: &[Hunk]) -> HashMap<&str, Vec<&Hunk>> {
    let mut map: HashMap<&str, Vec<&Hunk>> = HashMap::new();
    for hunk in hunks {
        map.entry(hunk.filename.as_str()).or_default().push(hunk);
    }
    map
}

/// Tags whose definition range overlaps at least one hunk of their file.
///
/// Each tag is reported at most once, in the index's global order. Files
/// without hunks contribute nothing; files with hunks but no tags likewise.
pub fn changed_tags<'a>(index: &'a SymbolIndex, hunks: &[Hunk]) -> Vec<&'a Tag> {
    let by_file = hunks_by_file(hunks);
    let tags = index.tags();

    let mut matched: Vec<usize> = Vec::new();
    for (file, file_hunks) in &by_file {
        for &i in index.indices_for(file) {
            let end = index.implicit_end(i);
            if file_hunks
                .iter()
                .any(|hunk| overlaps(tags[i].line, end, hunk))
            {
                matched.push(i);
            }
        }
    }
    matched.sort_unstable();

    debug!(
        tags = index.len(),
        files = by_file.len(),
        changed = matched.len(),
        "correlated tags with hunks"
    );

    matched.into_iter().map(|i| &tags[i]).collect()
}
