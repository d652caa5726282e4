//! Reference hit records.

use serde::Serialize;

/// How a reference token was recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    /// An identifier immediately followed by `(`.
    Call,
    /// A capitalized word immediately after `<`, e.g. a UI component tag.
    Markup,
}

/// A candidate reference found on an added line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceHit {
    /// File the added line belongs to.
    pub file: String,
    /// Number of the added line as recorded by the diff parser.
    pub line: i64,
    /// The referenced token.
    pub name: String,
    pub kind: ReferenceKind,
}

impl ReferenceHit {
    pub fn new(
        file: impl Into<String>,
        line: i64,
        name: impl Into<String>,
        kind: ReferenceKind,
    ) -> Self {
        Self {
            file: file.into(),
            line,
            name: name.into(),
            kind,
        }
    }
}
