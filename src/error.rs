//! Error types for tagdiff.
//!
//! Uses thiserror for derive macros. Every variant is fatal: the run aborts
//! with no partial output and the variant decides the process exit code.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for tagdiff operations.
#[derive(Error, Debug)]
pub enum TagdiffError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// A git query failed.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// The tag extraction tool failed or its output could not be read.
    #[error("Tag extraction failed: {0}")]
    TagError(String),

    /// Commit metadata was missing or did not have the expected shape.
    #[error("Commit metadata unavailable: {0}")]
    MetadataError(String),
}

impl TagdiffError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            TagdiffError::UserError(_) => exit_codes::USER_ERROR,
            TagdiffError::GitError(_) => exit_codes::GIT_FAILURE,
            TagdiffError::TagError(_) => exit_codes::TAG_FAILURE,
            TagdiffError::MetadataError(_) => exit_codes::METADATA_FAILURE,
        }
    }
}

/// Result type alias for tagdiff operations.
pub type Result<T> = std::result::Result<T, TagdiffError>;
