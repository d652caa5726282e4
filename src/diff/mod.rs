//! Unified diff parsing for tagdiff.
//!
//! Turns the output of `git show --unified=1` into per-file hunks with
//! old/new line ranges and the text of every added and removed line.
//!
//! The parser is deliberately lenient:
//! - Lines before the first `diff --git` header are ignored
//! - Per-file metadata (`index`, `---`, `+++`) is skipped
//! - Content before the first hunk header of a file is skipped
//! - Anything unrecognized inside a hunk is treated as context

mod helpers;
mod parser;
mod types;


pub use parser::{DiffParser, changed_files, parse_unified_diff};
pub use types::{Hunk, HunkHeader, Line};
