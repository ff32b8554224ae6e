//! Property-based tests for buffer serialization and history laws.
//!
//! Uses proptest to verify invariants that must hold across all valid inputs.

use linebuf::{CURSOR_SENTINEL, EditSession, History, LineBuffer, Snapshot};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Content strings with no sentinel characters.
fn content_string() -> impl Strategy<Value = String> {
    "\\PC{0,40}".prop_map(|s| s.chars().filter(|&ch| ch != CURSOR_SENTINEL).collect())
}

/// Valid serialized buffer states: content with one sentinel inserted.
fn valid_snapshot() -> impl Strategy<Value = String> {
    (content_string(), any::<prop::sample::Index>()).prop_map(|(content, idx)| {
        let chars: Vec<char> = content.chars().collect();
        let pos = idx.index(chars.len() + 1);
        let mut out = String::new();
        out.extend(&chars[..pos]);
        out.push(CURSOR_SENTINEL);
        out.extend(&chars[pos..]);
        out
    })
}

/// One editing command, encoded for replay against a session.
#[derive(Clone, Debug)]
enum Command {
    Insert(String),
    Delete,
    Left,
    Right,
}

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        content_string().prop_map(Command::Insert),
        Just(Command::Delete),
        Just(Command::Left),
        Just(Command::Right),
    ]
}

fn apply(session: &mut EditSession, cmd: &Command) {
    match cmd {
        Command::Insert(text) => {
            session.insert(text);
        }
        Command::Delete => {
            session.delete_char();
        }
        Command::Left => {
            session.move_left();
        }
        Command::Right => {
            session.move_right();
        }
    }
}

fn is_mutation(cmd: &Command) -> bool {
    matches!(cmd, Command::Insert(_) | Command::Delete)
}

// ============================================================================
// Serialization Properties
// ============================================================================

proptest! {
    /// restore(serialize(b)) reproduces the exact serialization.
    #[test]
    fn serialize_restore_roundtrip(s in valid_snapshot()) {
        let buf = LineBuffer::from_snapshot(&Snapshot::new(s.clone()));
        let serialized = buf.serialize();
        prop_assert_eq!(serialized.as_str(), s.as_str());

        let again = LineBuffer::from_snapshot(&buf.serialize());
        prop_assert_eq!(again.serialize(), buf.serialize());
    }

    /// Every restored buffer satisfies the chain invariants.
    #[test]
    fn restored_buffer_is_consistent(s in "\\PC{0,40}") {
        let buf = LineBuffer::from_snapshot(&Snapshot::new(s));
        prop_assert!(buf.is_consistent());
        prop_assert!(buf.serialize().validate().is_ok());
    }

    /// Serialization always contains exactly one sentinel after any command
    /// sequence, whatever the inserted text contained.
    #[test]
    fn single_sentinel_invariant(cmds in prop::collection::vec(command(), 0..30)) {
        let mut session = EditSession::new();
        for cmd in &cmds {
            apply(&mut session, cmd);
            prop_assert!(session.snapshot().validate().is_ok());
            prop_assert!(session.buffer().is_consistent());
        }
    }

    /// Insert places text immediately left of the cursor, in order.
    #[test]
    fn insert_lands_left_of_cursor(start in valid_snapshot(), text in content_string()) {
        let mut buf = LineBuffer::from_snapshot(&Snapshot::new(start.clone()));
        let before_idx = buf.cursor_index();
        buf.insert_before(&text);

        let text_len = text.chars().count();
        prop_assert_eq!(buf.cursor_index(), before_idx + text_len);

        let content: Vec<char> = buf.text().chars().collect();
        let inserted: Vec<char> = text.chars().collect();
        prop_assert_eq!(&content[before_idx..before_idx + text_len], &inserted[..]);
    }
}

// ============================================================================
// Movement Properties
// ============================================================================

proptest! {
    /// moveLeft then moveRight restores the serialization (and vice versa),
    /// away from the ends.
    #[test]
    fn opposite_moves_cancel(s in valid_snapshot()) {
        let mut buf = LineBuffer::from_snapshot(&Snapshot::new(s.clone()));
        if !buf.at_line_start() {
            buf.move_left();
            buf.move_right();
            let serialized = buf.serialize();
            prop_assert_eq!(serialized.as_str(), s.as_str());
        }

        let mut buf = LineBuffer::from_snapshot(&Snapshot::new(s.clone()));
        if !buf.at_line_end() {
            buf.move_right();
            buf.move_left();
            let serialized = buf.serialize();
            prop_assert_eq!(serialized.as_str(), s.as_str());
        }
    }

    /// Moves never change the content, only the cursor position.
    #[test]
    fn moves_preserve_content(s in valid_snapshot(), lefts in 0usize..10, rights in 0usize..10) {
        let mut buf = LineBuffer::from_snapshot(&Snapshot::new(s.clone()));
        let content = buf.text();
        for _ in 0..lefts {
            buf.move_left();
        }
        for _ in 0..rights {
            buf.move_right();
        }
        prop_assert_eq!(buf.text(), content);
        prop_assert!(buf.is_consistent());
    }
}

// ============================================================================
// History Laws
// ============================================================================

proptest! {
    /// One undo per mutation restores the initial serialization; one redo per
    /// undo restores the pre-undo serialization.
    #[test]
    fn undo_redo_inverse_law(cmds in prop::collection::vec(command(), 0..20)) {
        let mut session = EditSession::new();
        let initial = session.snapshot();

        let mutations = cmds.iter().filter(|c| is_mutation(c)).count();
        for cmd in &cmds {
            apply(&mut session, cmd);
        }
        let final_state = session.snapshot();

        for _ in 0..mutations {
            session.undo();
        }
        // Moves before the first mutation are no-ops on "|", so the first
        // capture is exactly the initial serialization
        prop_assert_eq!(session.snapshot(), initial);

        for _ in 0..mutations {
            session.redo();
        }
        prop_assert_eq!(session.snapshot(), final_state);
    }

    /// After undo then a fresh mutation, redo is a no-op.
    #[test]
    fn redo_destroyed_by_fresh_edit(text in content_string()) {
        let mut session = EditSession::new();
        session.insert("seed");
        session.undo();
        session.insert(&text);

        let before = session.snapshot();
        prop_assert_eq!(session.redo(), before);
    }

    /// Depth-bounded history retains exactly the most recent captures.
    #[test]
    fn depth_bound_is_enforced(depth in 1usize..8, edits in 1usize..20) {
        let mut buf = LineBuffer::new();
        let mut history = History::with_max_depth(depth);
        for i in 0..edits {
            history.capture(buf.serialize());
            buf.insert_before(&format!("{}", i % 10));
        }
        prop_assert_eq!(history.undo_depth(), depth.min(edits));
    }
}
