//! Plain line-oriented terminal front end.
//!
//! [`TerminalInput`] reads answers line by line and re-prompts until they
//! are valid; [`TerminalRenderer`] redraws the board and score for each
//! [`MatchEvent`](noughts_core::MatchEvent). Both are generic over their
//! reader and writer so tests can drive them with in-memory buffers.

mod input;
mod render;

pub use input::TerminalInput;
pub use render::TerminalRenderer;

use crossterm::{cursor::MoveTo, queue, terminal::Clear, terminal::ClearType};
use std::io::{self, Write};

/// Prefix for every prompt line.
pub(crate) fn prompt(out: &mut impl Write, msg: &str) -> io::Result<()> {
    writeln!(out, "=> {}", msg)
}

/// Blank lines.
pub(crate) fn spacer(out: &mut impl Write, lines: usize) -> io::Result<()> {
    for _ in 0..lines {
        writeln!(out)?;
    }
    Ok(())
}

/// Clears the screen and homes the cursor.
pub(crate) fn clear_screen(out: &mut impl Write) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    out.flush()
}

/// Draws `msg` inside a single-line box.
pub fn boxed(msg: &str) -> String {
    let width = msg.chars().count() + 2;
    let horizontal = "\u{2500}".repeat(width);
    format!(
        "\u{250C}{h}\u{2510}\n\u{2502} {msg} \u{2502}\n\u{2514}{h}\u{2518}",
        h = horizontal,
        msg = msg
    )
}

/// Joins items as "1, 2, or 3" / "1 or 2" / "1".
pub fn joinor<T: ToString>(items: &[T], delimiter: &str, word: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{} {} {}", first.to_string(), word, second.to_string()),
        [init @ .., last] => {
            let head: Vec<String> = init.iter().map(ToString::to_string).collect();
            format!(
                "{}{}{} {}",
                head.join(delimiter),
                delimiter,
                word,
                last.to_string()
            )
        }
    }
}
