//! Error types for linebuf.
//!
//! The core defines every edge condition (deleting at the head, moving past
//! either end, undo/redo on empty history) as a no-op, so almost nothing here
//! can fail. The two genuine failure surfaces are strict snapshot validation
//! and driver I/O.

use std::fmt;
use std::io;

/// Result type alias for linebuf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for linebuf operations.
#[derive(Debug)]
pub enum Error {
    /// A snapshot failed strict validation (missing or duplicated sentinel).
    ///
    /// Only produced by [`Snapshot::validate`](crate::Snapshot::validate);
    /// restore itself is permissive and never fails.
    InvalidSnapshot(String),
    /// I/O error from the interactive driver.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSnapshot(reason) => write!(f, "invalid snapshot: {reason}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidSnapshot(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
