//! Problem loading error types.
//!
//! Loading is the only stage of a quiz that can fail on bad input. Once the
//! quiz loop is running every line the user types is a valid (if wrong)
//! answer, so these are the only errors surfaced to the user.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a problem set.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The problem file could not be opened or read.
    #[error("cannot read problem file {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A row could not be turned into a problem.
    #[error("malformed row{}: {reason}", line.map(|l| format!(" at line {l}")).unwrap_or_default())]
    Format { line: Option<u64>, reason: String },
}

impl LoadError {
    /// Returns `true` if the file itself could not be opened or read.
    pub fn is_file_error(&self) -> bool {
        matches!(self, LoadError::File { .. })
    }

    /// Returns `true` if the file was readable but a row was malformed.
    pub fn is_format_error(&self) -> bool {
        matches!(self, LoadError::Format { .. })
    }
}
