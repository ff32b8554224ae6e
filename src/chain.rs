//! Arena-backed storage for the cell chain.
//!
//! The buffer's ordered sequence is a doubly-linked chain of character cells.
//! Rather than heap-allocated nodes with raw pointers, cells live in a
//! [`CellArena`]: a `Vec` of slots addressed by stable [`CellId`] indices, with
//! predecessor/successor stored as optional ids. Freed slots go on a free list
//! and are reused by later allocations, so a long editing session does not grow
//! the arena without bound.
//!
//! # Usage
//!
//! ```
//! use linebuf::chain::CellArena;
//!
//! let mut arena = CellArena::new();
//! let a = arena.alloc('a');
//! let b = arena.alloc('b');
//! arena.link(a, b);
//!
//! assert_eq!(arena.get(a).map(|c| c.ch), Some('a'));
//! assert_eq!(arena.get(a).and_then(|c| c.next), Some(b));
//! assert_eq!(arena.get(b).and_then(|c| c.prev), Some(a));
//! ```
//!
//! # Invariants
//!
//! - Slot 0 is reserved/invalid; `CellId::INVALID` never resolves to a cell.
//! - `get` returns `None` for freed or out-of-range ids.
//! - `link` keeps prev/next mutually consistent for the pair it touches.

/// Stable index of a cell in a [`CellArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellId(u32);

impl CellId {
    /// Reserved invalid id (slot 0).
    pub const INVALID: Self = Self(0);

    /// Raw slot index.
    #[must_use]
    pub fn index(self) -> u32 {
        self.0
    }

    /// Check whether this id could refer to a live cell.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.0 != 0
    }
}

/// One cell in the chain: a character plus links to its neighbors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// The character this cell carries.
    pub ch: char,
    /// Predecessor in the chain, if any.
    pub prev: Option<CellId>,
    /// Successor in the chain, if any.
    pub next: Option<CellId>,
}

impl Cell {
    /// Create an unlinked cell.
    #[must_use]
    pub fn new(ch: char) -> Self {
        Self {
            ch,
            prev: None,
            next: None,
        }
    }
}

/// Slab of cell slots with a free list for O(1) reuse.
///
/// Not thread-safe; the owning buffer serializes all access.
#[derive(Clone, Debug, Default)]
pub struct CellArena {
    /// Slot storage. Index 0 is reserved (invalid); `None` marks a freed slot.
    slots: Vec<Option<Cell>>,
    /// Stack of freed slot indices available for reuse.
    free_list: Vec<u32>,
}

impl CellArena {
    /// Create an empty arena with slot 0 reserved.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: vec![None],
            free_list: Vec::new(),
        }
    }

    /// Create an arena with pre-allocated capacity (excluding the reserved slot).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity + 1);
        slots.push(None);
        Self {
            slots,
            free_list: Vec::new(),
        }
    }

    /// Allocate a cell carrying `ch`, reusing a freed slot when one exists.
    pub fn alloc(&mut self, ch: char) -> CellId {
        let cell = Some(Cell::new(ch));
        if let Some(idx) = self.free_list.pop() {
            self.slots[idx as usize] = cell;
            CellId(idx)
        } else {
            let idx = self.slots.len() as u32;
            self.slots.push(cell);
            CellId(idx)
        }
    }

    /// Free a cell, returning its last contents.
    ///
    /// Invalid or already-freed ids return `None` without modification.
    pub fn free(&mut self, id: CellId) -> Option<Cell> {
        if !id.is_valid() {
            return None;
        }
        let slot = self.slots.get_mut(id.0 as usize)?;
        let cell = slot.take();
        if cell.is_some() {
            self.free_list.push(id.0);
        }
        cell
    }

    /// Look up a live cell.
    #[must_use]
    pub fn get(&self, id: CellId) -> Option<&Cell> {
        self.slots.get(id.0 as usize).and_then(Option::as_ref)
    }

    /// Look up a live cell mutably.
    pub fn get_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        self.slots.get_mut(id.0 as usize).and_then(Option::as_mut)
    }

    /// Check if an id refers to a live cell.
    #[must_use]
    pub fn contains(&self, id: CellId) -> bool {
        self.get(id).is_some()
    }

    /// Make `b` the successor of `a`, fixing both directions.
    pub fn link(&mut self, a: CellId, b: CellId) {
        if let Some(cell) = self.get_mut(a) {
            cell.next = Some(b);
        }
        if let Some(cell) = self.get_mut(b) {
            cell.prev = Some(a);
        }
    }

    /// Set a cell's predecessor link only. No-op on a dead id.
    pub fn set_prev(&mut self, id: CellId, prev: Option<CellId>) {
        if let Some(cell) = self.get_mut(id) {
            cell.prev = prev;
        }
    }

    /// Set a cell's successor link only. No-op on a dead id.
    pub fn set_next(&mut self, id: CellId, next: Option<CellId>) {
        if let Some(cell) = self.get_mut(id) {
            cell.next = next;
        }
    }

    /// Swap the character contents of two live cells, leaving links untouched.
    ///
    /// No-op unless both ids are live.
    pub fn swap_chars(&mut self, a: CellId, b: CellId) {
        let Some(ch_a) = self.get(a).map(|c| c.ch) else {
            return;
        };
        let Some(ch_b) = self.get(b).map(|c| c.ch) else {
            return;
        };
        if let Some(cell) = self.get_mut(a) {
            cell.ch = ch_b;
        }
        if let Some(cell) = self.get_mut(b) {
            cell.ch = ch_a;
        }
    }

    /// Number of live cells.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.slots.iter().skip(1).filter(|s| s.is_some()).count()
    }

    /// Total slots ever allocated (excluding the reserved slot).
    #[must_use]
    pub fn total_slots(&self) -> usize {
        self.slots.len().saturating_sub(1)
    }

    /// Number of freed slots available for reuse.
    #[must_use]
    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }

    /// Reset the arena to its initial state (only slot 0 reserved).
    pub fn clear(&mut self) {
        self.slots.truncate(1);
        self.free_list.clear();
    }
}
