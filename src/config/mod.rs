//! Configuration model for tagdiff.
//!
//! Represents the optional `.tagdiff.yaml` at the repository root. Parsing
//! is forward compatible (unknown fields are ignored) and every field has a
//! default.

mod model;
mod operations;
pub mod types;


pub use model::Config;
pub use types::{DEFAULT_CONFIG_FILE, TagFormat};
