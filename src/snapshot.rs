//! Serialized buffer states.
//!
//! A [`Snapshot`] is the buffer's only external representation: a plain string
//! holding the in-order characters of the chain, with the cursor marked by the
//! [`CURSOR_SENTINEL`] character. Snapshots are value types with no references
//! into any live buffer, which is what lets the history layer exchange them
//! freely with the buffer's serialize/restore operations.
//!
//! # Format
//!
//! A well-formed snapshot contains exactly one sentinel; everything else is
//! literal content. Parsing is permissive: the first sentinel wins, later
//! sentinels are dropped on restore, and a string with no sentinel is treated
//! as "cursor at end". [`Snapshot::validate`] is available when strict
//! rejection is wanted instead.
//!
//! ```
//! use linebuf::Snapshot;
//!
//! let snap = Snapshot::new("ab|cd");
//! assert_eq!(snap.cursor_index(), Some(2));
//! assert_eq!(snap.content(), "abcd");
//! assert!(snap.validate().is_ok());
//! ```

use crate::error::{Error, Result};
use std::fmt;

/// Reserved character marking the cursor position in a serialized buffer.
pub const CURSOR_SENTINEL: char = '|';

/// Immutable serialized capture of a buffer's full state at one instant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Snapshot(String);

impl Snapshot {
    /// Create a snapshot from a string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// The raw serialized string, sentinel included.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the snapshot, yielding the raw string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Character index of the first sentinel, if any.
    #[must_use]
    pub fn cursor_index(&self) -> Option<usize> {
        self.0.chars().position(|ch| ch == CURSOR_SENTINEL)
    }

    /// Content characters with all sentinel occurrences stripped.
    #[must_use]
    pub fn content(&self) -> String {
        self.0.chars().filter(|&ch| ch != CURSOR_SENTINEL).collect()
    }

    /// Total character count, sentinel included.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.0.chars().count()
    }

    /// Check that this snapshot contains exactly one sentinel.
    ///
    /// Restore never requires this; it is for callers that want to reject
    /// malformed input up front rather than let the permissive policy apply.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSnapshot`] when the sentinel is missing or
    /// occurs more than once.
    pub fn validate(&self) -> Result<()> {
        match self.0.chars().filter(|&ch| ch == CURSOR_SENTINEL).count() {
            1 => Ok(()),
            0 => Err(Error::InvalidSnapshot("missing cursor sentinel".into())),
            n => Err(Error::InvalidSnapshot(format!(
                "{n} cursor sentinels, expected exactly one"
            ))),
        }
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Snapshot {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for Snapshot {
    fn from(s: String) -> Self {
        Self(s)
    }
}
