//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for a tagdiff run.
///
/// This struct represents the contents of `.tagdiff.yaml`. Unknown fields in
/// the YAML are ignored and every field has a default, so the file is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Git settings
    // =========================================================================
    /// Remote whose fetch URL and default branch describe the commit.
    #[serde(default = "default_remote")]
    pub remote: String,

    /// URL scheme used when building commit links from the remote.
    #[serde(default = "default_web_scheme")]
    pub web_scheme: String,

    // =========================================================================
    // Tag extraction settings
    // =========================================================================
    /// Executable used for tag extraction.
    #[serde(default = "default_ctags_command")]
    pub ctags_command: String,

    /// Output format requested from the tag extractor.
    #[serde(default)]
    pub tag_format: TagFormat,

    // =========================================================================
    // Reference scanning settings
    // =========================================================================
    /// Whether added lines are scanned for references at all.
    #[serde(default = "default_true")]
    pub scan_references: bool,

    /// Tokens ignored in addition to the built-in keyword/builtin list.
    #[serde(default)]
    pub extra_ignore: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remote: default_remote(),
            web_scheme: default_web_scheme(),
            ctags_command: default_ctags_command(),
            tag_format: TagFormat::default(),
            scan_references: default_true(),
            extra_ignore: Vec::new(),
        }
    }
}
