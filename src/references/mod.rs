//! Heuristic reference detection on added lines.
//!
//! Purely lexical: nothing is resolved against the symbol table. Two token
//! shapes are recognized:
//! - call-like: `name(`
//! - markup-like: `<Name`, first occurrence per line only
//!
//! Both are filtered by an ignore list of keywords, builtins and
//! placeholders that is fixed when the scanner is built.

mod patterns;
mod scanner;
mod types;


pub use patterns::{CALL_PATTERN, DEFAULT_IGNORE, MARKUP_PATTERN};
pub use scanner::ReferenceScanner;
pub use types::{ReferenceHit, ReferenceKind};
