//! Line-sorted symbol index.

use super::types::Tag;
use std::collections::HashMap;

/// All tags of a run in one array, stable-sorted by line across every file,
/// plus per-file lists of indices into that array.
///
/// A tag's implicit end is bounded by the next tag in the *global* order,
/// which may belong to a different file. Per-file indices are only used to
/// find candidates; they never decide what "next" means.
#[derive(Debug, Clone, Default)]
pub struct SymbolIndex {
    tags: Vec<Tag>,
    by_file: HashMap<String, Vec<usize>>,
}

impl SymbolIndex {
    /// Build the index. Tags with equal lines keep their input order.
    pub fn new(mut tags: Vec<Tag>) -> Self {
        tags.sort_by_key(|tag| tag.line);

        let mut by_file: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, tag) in tags.iter().enumerate() {
            by_file.entry(tag.file.clone()).or_default().push(i);
        }

        Self { tags, by_file }
    }

    /// Tags in global sort order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Indices (ascending) of the tags defined in `file`.
    pub fn indices_for(&self, file: &str) -> &[usize] {
        self.by_file.get(file).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Last line covered by the tag at `index`.
    ///
    /// `Some(next.line - 1)` when another tag follows in sort order, `None`
    /// (open-ended) for the last tag.
    pub fn implicit_end(&self, index: usize) -> Option<i64> {
        self.tags.get(index + 1).map(|next| next.line - 1)
    }
}
