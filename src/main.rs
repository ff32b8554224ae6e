//! Interactive driver for a linebuf editing session.
//!
//! Thin I/O glue only: reads one command per line, dispatches to the
//! [`EditSession`], and prints the framed serialized buffer it returns.

use linebuf::{EditSession, LogLevel, Result, set_log_callback};
use std::io::{self, BufRead, Write};

const FRAME_TOP: &str = "------------------------ Text Editor Start ------------------------";
const FRAME_BOTTOM: &str = "------------------------- Text Editor End -------------------------";

fn main() -> Result<()> {
    set_log_callback(|level, message| {
        if matches!(level, LogLevel::Warn | LogLevel::Error) {
            eprintln!("[{level:?}] {message}");
        }
    });

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();
    let mut session = EditSession::new();

    loop {
        write!(
            stdout,
            "Enter command (I: Insert, D: Delete, L: Left, R: Right, U: Undo, Y: Redo, Q: Quit): "
        )?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break; // EOF ends the session
        };
        let line = line?;
        let Some(command) = line.trim().chars().next() else {
            continue;
        };

        let state = match command.to_ascii_uppercase() {
            'I' => {
                write!(stdout, "Enter text to insert: ")?;
                stdout.flush()?;
                let text = match lines.next() {
                    Some(text) => text?,
                    None => break,
                };
                session.insert(&text)
            }
            'D' => session.delete_char(),
            'L' => session.move_left(),
            'R' => session.move_right(),
            'U' => session.undo(),
            'Y' => session.redo(),
            'Q' => break,
            _ => {
                writeln!(stdout, "Invalid command!")?;
                continue;
            }
        };

        writeln!(stdout, "{FRAME_TOP}")?;
        writeln!(stdout, "{state}")?;
        writeln!(stdout, "{FRAME_BOTTOM}")?;
    }

    Ok(())
}
