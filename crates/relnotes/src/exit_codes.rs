//! Exit codes for the CLI

use relnotes_core::{ChangelogError, RelnotesError};

/// Success
#[allow(dead_code)]
pub const SUCCESS: i32 = 0;

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// No commit lines to classify
pub const EMPTY_LOG: i32 = 3;

/// Release notes could not be written
pub const WRITE_ERROR: i32 = 4;

/// Pick the exit code for an error returned by a command
pub fn for_error(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<RelnotesError>() {
        Some(e) if e.is_config() => CONFIG_ERROR,
        Some(RelnotesError::Changelog(ChangelogError::EmptyInput)) => EMPTY_LOG,
        Some(RelnotesError::Changelog(ChangelogError::WriteFailed { .. })) => WRITE_ERROR,
        _ => ERROR,
    }
}
