//! Symbol tags for tagdiff.
//!
//! - [`Tag`] is one symbol definition reported by ctags
//! - [`SymbolIndex`] holds every tag of a run sorted by line
//! - [`extract_tags_at`] runs ctags over the changed files as of a commit

mod ctags;
mod etags;
mod index;
mod types;

#[cfg(test)]
mod tests;

pub use ctags::{ctags_args, extract_tags, extract_tags_at, parse_ctags_json};
pub use etags::parse_etags;
pub use index::SymbolIndex;
pub use types::Tag;
