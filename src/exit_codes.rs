//! Exit code constants for the tagdiff CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, bad config)
//! - 3: Git operation failure
//! - 4: Tag extraction failure
//! - 5: Commit metadata missing or malformed

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid config, or output serialization failure.
pub const USER_ERROR: i32 = 1;

/// Git operation failure: diff, rev-parse, log or remote queries.
pub const GIT_FAILURE: i32 = 3;

/// Tag extraction failure: ctags could not run or produced unreadable output.
pub const TAG_FAILURE: i32 = 4;

/// Commit metadata failure: an expected field or pattern was absent.
pub const METADATA_FAILURE: i32 = 5;
