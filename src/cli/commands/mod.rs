//! CLI command implementations
//!
//! This module contains all CLI command implementations. Commands share the
//! exit-code convention: 0 success, 2 configuration error, 4 connection
//! error, 5 fatal.

pub mod export;
pub mod init;
pub mod search;
pub mod validate;

use crate::domain::RosterError;

/// Maps a failed operation to the shared exit-code convention
pub(crate) fn error_exit_code(err: &RosterError) -> i32 {
    match err {
        RosterError::Configuration(_) => 2,
        RosterError::Directory(_) => 4,
        _ => 5,
    }
}
