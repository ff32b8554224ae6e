//! Snapshot-based undo/redo history.
//!
//! [`History`] owns two stacks of [`Snapshot`]s. Before each mutating edit the
//! caller captures the buffer's pre-mutation serialization onto the undo stack;
//! undo and redo walk the stacks, exchanging full serialized states with the
//! buffer's serialize/restore operations. History never touches the buffer's
//! internal links, so the chain representation and the history representation
//! can change independently.
//!
//! This is linear undo: capturing a new edit destroys the redo branch. The
//! stacks are depth-bounded (default 1000 snapshots); the oldest entries are
//! dropped when the bound is exceeded.
//!
//! # Examples
//!
//! ```
//! use linebuf::{History, LineBuffer};
//!
//! let mut buf = LineBuffer::new();
//! let mut history = History::new();
//!
//! history.capture(buf.serialize());
//! buf.insert_before("hi");
//! assert_eq!(buf.serialize().as_str(), "hi|");
//!
//! assert!(history.undo(&mut buf));
//! assert_eq!(buf.serialize().as_str(), "|");
//!
//! assert!(history.redo(&mut buf));
//! assert_eq!(buf.serialize().as_str(), "hi|");
//! ```

use crate::buffer::LineBuffer;
use crate::snapshot::Snapshot;

/// Default maximum number of snapshots retained on the undo stack.
pub const DEFAULT_MAX_HISTORY_DEPTH: usize = 1000;

/// Linear undo/redo history over full buffer snapshots.
#[derive(Clone, Debug)]
pub struct History {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    /// Maximum snapshots retained. Oldest entries are dropped when exceeded.
    max_depth: usize,
}

impl Default for History {
    fn default() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth: DEFAULT_MAX_HISTORY_DEPTH,
        }
    }
}

impl History {
    /// Create an empty history with the default depth bound.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty history with a custom depth bound.
    #[must_use]
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    /// Record the pre-mutation state of the buffer.
    ///
    /// Pushes `current` onto the undo stack and clears the redo stack: redo
    /// history is only valid immediately after an undo, never after a fresh
    /// edit. Callers invoke this immediately before applying a mutation, with
    /// `current` taken from `buffer.serialize()`.
    pub fn capture(&mut self, current: Snapshot) {
        self.undo_stack.push(current);
        self.redo_stack.clear();
        if self.undo_stack.len() > self.max_depth {
            let excess = self.undo_stack.len() - self.max_depth;
            self.undo_stack.drain(..excess);
        }
    }

    /// Restore the most recently captured state into `buffer`.
    ///
    /// The buffer's current serialization is pushed onto the redo stack first.
    /// Returns `false` (buffer unchanged) when the undo stack is empty.
    pub fn undo(&mut self, buffer: &mut LineBuffer) -> bool {
        let Some(snapshot) = self.undo_stack.pop() else {
            return false;
        };
        self.redo_stack.push(buffer.serialize());
        buffer.restore(&snapshot);
        true
    }

    /// Restore the most recently undone state into `buffer`.
    ///
    /// Symmetric to [`undo`](Self::undo): the current serialization goes onto
    /// the undo stack. Returns `false` when the redo stack is empty.
    pub fn redo(&mut self, buffer: &mut LineBuffer) -> bool {
        let Some(snapshot) = self.redo_stack.pop() else {
            return false;
        };
        self.undo_stack.push(buffer.serialize());
        buffer.restore(&snapshot);
        true
    }

    /// Check if undo is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of snapshots on the undo stack.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of snapshots on the redo stack.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// The configured depth bound.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Change the depth bound. Excess entries are pruned on the next capture.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth;
    }

    /// Drop all undo and redo entries.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_history_noops() {
        let mut buf = LineBuffer::new();
        let mut history = History::new();

        assert!(!history.undo(&mut buf));
        assert!(!history.redo(&mut buf));
        assert_eq!(buf.serialize().as_str(), "|");
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_capture_then_undo() {
        let mut buf = LineBuffer::new();
        let mut history = History::new();

        history.capture(buf.serialize());
        buf.insert_before("abc");
        assert_eq!(buf.serialize().as_str(), "abc|");

        assert!(history.undo(&mut buf));
        assert_eq!(buf.serialize().as_str(), "|");
        assert!(history.can_redo());
    }

    #[test]
    fn test_undo_redo_inverse() {
        let mut buf = LineBuffer::new();
        let mut history = History::new();

        for text in ["a", "b", "c"] {
            history.capture(buf.serialize());
            buf.insert_before(text);
        }
        assert_eq!(buf.serialize().as_str(), "abc|");

        // One undo per mutation restores the initial state
        assert!(history.undo(&mut buf));
        assert!(history.undo(&mut buf));
        assert!(history.undo(&mut buf));
        assert_eq!(buf.serialize().as_str(), "|");
        assert!(!history.undo(&mut buf));

        // One redo per undo restores the pre-undo state
        assert!(history.redo(&mut buf));
        assert!(history.redo(&mut buf));
        assert!(history.redo(&mut buf));
        assert_eq!(buf.serialize().as_str(), "abc|");
        assert!(!history.redo(&mut buf));
    }

    #[test]
    fn test_capture_clears_redo() {
        let mut buf = LineBuffer::new();
        let mut history = History::new();

        history.capture(buf.serialize());
        buf.insert_before("a");
        history.undo(&mut buf);
        assert!(history.can_redo());

        // A fresh edit destroys the redo branch
        history.capture(buf.serialize());
        buf.insert_before("z");
        assert!(!history.can_redo());
        assert!(!history.redo(&mut buf));
        assert_eq!(buf.serialize().as_str(), "z|");
    }

    #[test]
    fn test_depth_bound_drops_oldest() {
        let mut buf = LineBuffer::new();
        let mut history = History::with_max_depth(3);
        assert_eq!(history.max_depth(), 3);

        for text in ["0", "1", "2", "3", "4"] {
            history.capture(buf.serialize());
            buf.insert_before(text);
        }
        assert_eq!(buf.serialize().as_str(), "01234|");
        assert_eq!(history.undo_depth(), 3);

        assert!(history.undo(&mut buf));
        assert!(history.undo(&mut buf));
        assert!(history.undo(&mut buf));
        assert!(!history.undo(&mut buf));
        // Oldest two captures were pruned
        assert_eq!(buf.serialize().as_str(), "01|");
    }

    #[test]
    fn test_clear() {
        let mut buf = LineBuffer::new();
        let mut history = History::new();

        history.capture(buf.serialize());
        buf.insert_before("a");
        history.undo(&mut buf);

        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.undo_depth(), 0);
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn test_undo_restores_cursor_position() {
        let mut buf = LineBuffer::from_snapshot(&Snapshot::new("ab|cd"));
        let mut history = History::new();

        history.capture(buf.serialize());
        buf.insert_before("XY");
        assert_eq!(buf.serialize().as_str(), "abXY|cd");

        history.undo(&mut buf);
        assert_eq!(buf.serialize().as_str(), "ab|cd");
        assert_eq!(buf.cursor_index(), 2);
    }
}
