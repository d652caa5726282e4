//! Symbol tag record.

use serde::Serialize;

/// A symbol definition location reported by the tag extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    /// Repository-relative path of the defining file.
    pub file: String,
    /// Symbol name, e.g. `ParseConfig`.
    pub name: String,
    /// Symbol kind as the extractor names it, e.g. `func`, `type`, `method`.
    pub kind: String,
    /// Signature text following the name, e.g. `(path string) error`. May be empty.
    pub signature: String,
    /// 1-based line of the definition.
    pub line: i64,
}

impl Tag {
    /// Create a new tag.
    pub fn new(
        file: impl Into<String>,
        name: impl Into<String>,
        kind: impl Into<String>,
        signature: impl Into<String>,
        line: i64,
    ) -> Self {
        Self {
            file: file.into(),
            name: name.into(),
            kind: kind.into(),
            signature: signature.into(),
            line,
        }
    }
}
