//! Configuration types and defaults for tagdiff.

use serde::{Deserialize, Serialize};

/// File name looked up at the repository root when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = ".tagdiff.yaml";

/// Output format requested from the tag extraction tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TagFormat {
    /// Universal-ctags JSON lines (`--output-format=json`).
    #[default]
    Json,
    /// Emacs-style TAGS (`ctags -e`).
    Etags,
}

impl TagFormat {
    /// Parse a tag format from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "json" => Some(Self::Json),
            "etags" => Some(Self::Etags),
            _ => None,
        }
    }
}

pub(super) fn default_remote() -> String {
    "origin".to_string()
}

pub(super) fn default_ctags_command() -> String {
    "ctags".to_string()
}

pub(super) fn default_web_scheme() -> String {
    "https".to_string()
}

pub(super) fn default_true() -> bool {
    true
}
