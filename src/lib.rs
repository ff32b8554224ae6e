//! `linebuf` - single-line editable text buffer with snapshot undo/redo.
//!
//! The buffer is an ordered chain of character cells with one distinguished
//! cell holding the cursor sentinel (`|`). The chain lives in an index-addressed
//! arena rather than pointer-linked nodes. Undo/redo works on full serialized
//! snapshots exchanged between the buffer and a pair of history stacks, and
//! [`EditSession`] ties both together behind the command surface an interactive
//! driver consumes.
//!
//! ```
//! use linebuf::EditSession;
//!
//! let mut session = EditSession::new();
//! session.insert("hello");
//! session.move_left();
//! assert_eq!(session.snapshot().as_str(), "hell|o");
//!
//! session.delete_char();
//! session.undo();
//! assert_eq!(session.snapshot().as_str(), "hell|o");
//! ```

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // LineBuffer in buffer.rs etc
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference

pub mod buffer;
pub mod chain;
pub mod error;
pub mod event;
pub mod history;
pub mod session;
pub mod snapshot;

// Re-export core types at crate root
pub use buffer::LineBuffer;
pub use chain::{Cell, CellArena, CellId};
pub use error::{Error, Result};
pub use event::{LogLevel, emit_event, emit_log, set_event_callback, set_log_callback};
pub use history::{DEFAULT_MAX_HISTORY_DEPTH, History};
pub use session::EditSession;
pub use snapshot::{CURSOR_SENTINEL, Snapshot};
