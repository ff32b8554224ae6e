//! Single-line buffer: a cell chain with an embedded cursor cell.
//!
//! [`LineBuffer`] owns a chain of character cells in a [`CellArena`] plus the
//! id of one distinguished cell: the cursor. The cursor is a real cell carrying
//! the sentinel character, present in the chain at all times. Insertion splices
//! new cells immediately before it; deletion removes the cell immediately
//! before it.
//!
//! # Cursor movement is a content swap
//!
//! Because the cursor is a chain cell rather than an external index, `move_left`
//! and `move_right` exchange the *character contents* of the cursor cell and its
//! neighbor, then move the cursor reference onto that neighbor. Serialized, this
//! looks like a pure cursor move; physically, the cell that holds the sentinel
//! trades places (by content) with the cell next to it. This is the original
//! design's intended behavior and is preserved as such, not "fixed" into a
//! relink.
//!
//! # Examples
//!
//! ```
//! use linebuf::{LineBuffer, Snapshot};
//!
//! let mut buf = LineBuffer::new();
//! buf.insert_before("hello");
//! assert_eq!(buf.serialize(), Snapshot::new("hello|"));
//!
//! buf.move_left();
//! buf.delete_before_cursor();
//! assert_eq!(buf.serialize(), Snapshot::new("hel|o"));
//! ```

use crate::chain::{CellArena, CellId};
use crate::event::{LogLevel, emit_log};
use crate::snapshot::{CURSOR_SENTINEL, Snapshot};

/// Ordered sequence of character cells with one embedded cursor cell.
///
/// Invariants (hold between all public calls):
///
/// - exactly one cursor cell exists in the chain;
/// - the chain from `head` via successor links reaches every live cell exactly
///   once and terminates;
/// - prev/next links are mutually consistent;
/// - the cursor cell is reachable from `head`.
#[derive(Clone, Debug)]
pub struct LineBuffer {
    arena: CellArena,
    head: CellId,
    cursor: CellId,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuffer {
    /// Create an empty buffer: a chain containing only the cursor cell.
    #[must_use]
    pub fn new() -> Self {
        let mut arena = CellArena::new();
        let cursor = arena.alloc(CURSOR_SENTINEL);
        Self {
            arena,
            head: cursor,
            cursor,
        }
    }

    /// Create a buffer from a serialized state. See [`restore`](Self::restore).
    #[must_use]
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let mut buf = Self::new();
        buf.restore(snapshot);
        buf
    }

    /// Serialize the chain in order, sentinel included.
    ///
    /// Always succeeds; an empty buffer serializes to `"|"`.
    #[must_use]
    pub fn serialize(&self) -> Snapshot {
        let mut out = String::with_capacity(self.arena.active_count());
        let mut current = Some(self.head);
        while let Some(id) = current {
            match self.arena.get(id) {
                Some(cell) => {
                    out.push(cell.ch);
                    current = cell.next;
                }
                None => break,
            }
        }
        Snapshot::new(out)
    }

    /// Discard the current chain and rebuild it from `snapshot`.
    ///
    /// The first sentinel character becomes the cursor cell. Later sentinel
    /// occurrences are dropped so the single-cursor invariant holds
    /// unconditionally. A snapshot with no sentinel gets a cursor cell
    /// appended at the end rather than failing.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.arena.clear();
        self.head = CellId::INVALID;
        self.cursor = CellId::INVALID;

        let mut tail = CellId::INVALID;
        let mut dropped = 0usize;
        for ch in snapshot.as_str().chars() {
            if ch == CURSOR_SENTINEL && self.cursor.is_valid() {
                dropped += 1;
                continue;
            }
            let id = self.arena.alloc(ch);
            if tail.is_valid() {
                self.arena.link(tail, id);
            } else {
                self.head = id;
            }
            tail = id;
            if ch == CURSOR_SENTINEL {
                self.cursor = id;
            }
        }

        if dropped > 0 {
            emit_log(
                LogLevel::Warn,
                &format!("restore dropped {dropped} extra cursor sentinel(s)"),
            );
        }

        // Missing sentinel degrades gracefully: cursor at end.
        if !self.cursor.is_valid() {
            let cursor = self.arena.alloc(CURSOR_SENTINEL);
            if tail.is_valid() {
                self.arena.link(tail, cursor);
            } else {
                self.head = cursor;
            }
            self.cursor = cursor;
        }
    }

    /// Splice `text` immediately before the cursor, character by character.
    ///
    /// The cursor cell is unchanged; its logical index advances by the length
    /// of the inserted text. Sentinel characters in `text` are skipped (and
    /// logged) so the buffer never holds a second cursor. Empty text is a
    /// valid no-op.
    pub fn insert_before(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == CURSOR_SENTINEL {
                emit_log(
                    LogLevel::Warn,
                    "insert skipped a cursor sentinel character in input text",
                );
                continue;
            }
            self.splice_before_cursor(ch);
        }
    }

    /// Remove the single cell immediately preceding the cursor.
    ///
    /// No-op when the cursor is at the head. Never removes the cursor cell.
    pub fn delete_before_cursor(&mut self) {
        let Some(doomed) = self.prev_of(self.cursor) else {
            return;
        };
        let before = self.prev_of(doomed);
        self.arena.set_prev(self.cursor, before);
        match before {
            Some(b) => self.arena.set_next(b, Some(self.cursor)),
            None => self.head = self.cursor,
        }
        let _ = self.arena.free(doomed);
    }

    /// Move the cursor one position left.
    ///
    /// Implemented as a content swap with the predecessor cell followed by
    /// moving the cursor reference onto it. No-op at the head.
    pub fn move_left(&mut self) {
        let Some(prev) = self.prev_of(self.cursor) else {
            return;
        };
        self.arena.swap_chars(self.cursor, prev);
        self.cursor = prev;
    }

    /// Move the cursor one position right. Symmetric to [`move_left`](Self::move_left).
    pub fn move_right(&mut self) {
        let Some(next) = self.next_of(self.cursor) else {
            return;
        };
        self.arena.swap_chars(self.cursor, next);
        self.cursor = next;
    }

    /// Content characters in order, sentinel excluded.
    #[must_use]
    pub fn text(&self) -> String {
        self.serialize().content()
    }

    /// Logical cursor index: number of content characters left of the cursor.
    #[must_use]
    pub fn cursor_index(&self) -> usize {
        self.serialize().cursor_index().unwrap_or(0)
    }

    /// Number of content characters (sentinel excluded).
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.arena.active_count().saturating_sub(1)
    }

    /// Check whether the buffer holds no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Check whether the cursor has no predecessor.
    #[must_use]
    pub fn at_line_start(&self) -> bool {
        self.prev_of(self.cursor).is_none()
    }

    /// Check whether the cursor has no successor.
    #[must_use]
    pub fn at_line_end(&self) -> bool {
        self.next_of(self.cursor).is_none()
    }

    /// Verify the chain invariants: every live cell reachable exactly once
    /// from head, links mutually consistent, cursor on the chain carrying the
    /// sentinel. Intended for tests and debug assertions.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut visited = 0usize;
        let mut saw_cursor = false;
        let mut prev: Option<CellId> = None;
        let mut current = Some(self.head);

        while let Some(id) = current {
            let Some(cell) = self.arena.get(id) else {
                return false;
            };
            if cell.prev != prev {
                return false;
            }
            if id == self.cursor {
                if cell.ch != CURSOR_SENTINEL || saw_cursor {
                    return false;
                }
                saw_cursor = true;
            }
            visited += 1;
            if visited > self.arena.active_count() {
                return false; // cycle
            }
            prev = Some(id);
            current = cell.next;
        }

        saw_cursor && visited == self.arena.active_count()
    }

    /// Slot statistics of the backing arena (live, total, free).
    #[must_use]
    pub fn arena_stats(&self) -> (usize, usize, usize) {
        (
            self.arena.active_count(),
            self.arena.total_slots(),
            self.arena.free_count(),
        )
    }

    fn prev_of(&self, id: CellId) -> Option<CellId> {
        self.arena.get(id).and_then(|c| c.prev)
    }

    fn next_of(&self, id: CellId) -> Option<CellId> {
        self.arena.get(id).and_then(|c| c.next)
    }

    /// Splice a single new cell immediately before the cursor cell.
    fn splice_before_cursor(&mut self, ch: char) {
        let id = self.arena.alloc(ch);
        let prev = self.prev_of(self.cursor);
        self.arena.set_prev(id, prev);
        self.arena.set_next(id, Some(self.cursor));
        match prev {
            Some(p) => self.arena.set_next(p, Some(id)),
            None => self.head = id,
        }
        self.arena.set_prev(self.cursor, Some(id));
    }
}
