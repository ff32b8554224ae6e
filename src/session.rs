//! Editing session composing a buffer with its history.
//!
//! [`EditSession`] is the primary type for interactive use. It owns a
//! [`LineBuffer`] and a [`History`] and exposes the command surface an
//! external driver needs: insert, delete, cursor moves, undo, redo. Each
//! command returns the new serialized buffer for display; none reports a
//! distinct failure code, since invalid positions and empty history are
//! absorbed as no-ops.
//!
//! Mutating commands (insert, delete) capture the pre-mutation serialization
//! into history first, then apply the mutation. Cursor moves are not captured,
//! matching the behavior the snapshot format was designed around.
//!
//! # Examples
//!
//! ```
//! use linebuf::EditSession;
//!
//! let mut session = EditSession::new();
//! assert_eq!(session.insert("hello").as_str(), "hello|");
//! assert_eq!(session.move_left().as_str(), "hell|o");
//! assert_eq!(session.delete_char().as_str(), "hel|o");
//!
//! assert_eq!(session.undo().as_str(), "hell|o");
//! assert_eq!(session.redo().as_str(), "hel|o");
//! ```

use crate::buffer::LineBuffer;
use crate::event::emit_event;
use crate::history::History;
use crate::snapshot::Snapshot;
use unicode_width::UnicodeWidthChar;

/// One editing session: a buffer plus its undo/redo history.
///
/// The session is single-threaded and synchronous; every command runs to
/// completion before returning. A host that needs concurrent access should
/// serialize all calls through a single-writer lock around the session, since
/// snapshots already provide a clean consistency boundary.
#[derive(Clone, Debug, Default)]
pub struct EditSession {
    buffer: LineBuffer,
    history: History,
}

impl EditSession {
    /// Create a session with an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with a custom undo depth bound.
    #[must_use]
    pub fn with_max_history_depth(max_depth: usize) -> Self {
        Self {
            buffer: LineBuffer::new(),
            history: History::with_max_depth(max_depth),
        }
    }

    /// Create a session whose buffer starts from a serialized state.
    ///
    /// History starts empty; the snapshot is the session's baseline.
    #[must_use]
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            buffer: LineBuffer::from_snapshot(snapshot),
            history: History::new(),
        }
    }

    /// Insert `text` before the cursor.
    ///
    /// Captures the pre-mutation state for undo, then splices the text in.
    pub fn insert(&mut self, text: &str) -> Snapshot {
        self.history.capture(self.buffer.serialize());
        self.buffer.insert_before(text);
        self.finish("insert")
    }

    /// Delete the character before the cursor (no-op at the head).
    ///
    /// Captures the pre-mutation state for undo even when the delete itself
    /// is a no-op, exactly as the original editor does.
    pub fn delete_char(&mut self) -> Snapshot {
        self.history.capture(self.buffer.serialize());
        self.buffer.delete_before_cursor();
        self.finish("delete")
    }

    /// Move the cursor one position left (no-op at the head). Not captured.
    pub fn move_left(&mut self) -> Snapshot {
        self.buffer.move_left();
        self.finish("left")
    }

    /// Move the cursor one position right (no-op at the tail). Not captured.
    pub fn move_right(&mut self) -> Snapshot {
        self.buffer.move_right();
        self.finish("right")
    }

    /// Undo the most recent captured mutation (no-op on empty history).
    pub fn undo(&mut self) -> Snapshot {
        self.history.undo(&mut self.buffer);
        self.finish("undo")
    }

    /// Redo the most recently undone mutation (no-op on empty redo stack).
    pub fn redo(&mut self) -> Snapshot {
        self.history.redo(&mut self.buffer);
        self.finish("redo")
    }

    /// Current serialized state, sentinel included.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.buffer.serialize()
    }

    /// Current content, sentinel excluded.
    #[must_use]
    pub fn text(&self) -> String {
        self.buffer.text()
    }

    /// Logical cursor index (characters left of the cursor).
    #[must_use]
    pub fn cursor_index(&self) -> usize {
        self.buffer.cursor_index()
    }

    /// Display column of the cursor: terminal width of the content left of it.
    ///
    /// Wide characters (CJK, most emoji) count as two columns.
    #[must_use]
    pub fn cursor_column(&self) -> usize {
        let idx = self.buffer.cursor_index();
        self.buffer
            .text()
            .chars()
            .take(idx)
            .map(|ch| ch.width().unwrap_or(0))
            .sum()
    }

    /// Check if undo is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Borrow the underlying buffer.
    #[must_use]
    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    /// Borrow the underlying history.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Drop all undo/redo entries, keeping the buffer as-is.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Serialize the post-operation state and notify the event callback.
    fn finish(&self, operation: &str) -> Snapshot {
        let snapshot = self.buffer.serialize();
        emit_event(operation, snapshot.as_str());
        snapshot
    }
}
