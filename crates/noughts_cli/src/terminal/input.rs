//! Keyboard answers for the human side.

use super::{clear_screen, joinor, prompt, spacer};
use noughts_core::{Board, InputClosed, InputProvider, Position, Side};
use std::io::{BufRead, Write};
use tracing::{debug, instrument, warn};

/// Reads the human's decisions from a line-oriented reader.
///
/// Every question loops until the answer is valid. End of input, or a
/// read/write failure, closes the input.
#[derive(Debug)]
pub struct TerminalInput<R, W> {
    reader: R,
    out: W,
    clear: bool,
}

impl<R: BufRead, W: Write> TerminalInput<R, W> {
    /// Creates an input reading from `reader` and prompting on `out`.
    pub fn new(reader: R, out: W, clear: bool) -> Self {
        Self { reader, out, clear }
    }

    /// Gives back the prompt writer.
    pub fn into_writer(self) -> W {
        self.out
    }

    /// Next line, trimmed and lowercased.
    fn read_answer(&mut self) -> Result<String, InputClosed> {
        self.out.flush().map_err(closed)?;
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => {
                debug!("End of input");
                Err(InputClosed)
            }
            Ok(_) => Ok(line.trim().to_lowercase()),
            Err(e) => Err(closed(e)),
        }
    }

    fn say(&mut self, msg: &str) -> Result<(), InputClosed> {
        prompt(&mut self.out, msg).map_err(closed)
    }
}

fn closed(e: std::io::Error) -> InputClosed {
    warn!(error = %e, "Terminal I/O failed");
    InputClosed
}

/// Parses a cell number that names an empty cell on `board`.
pub(crate) fn parse_square(answer: &str, board: &Board) -> Option<Position> {
    if answer.is_empty() || !answer.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    answer
        .parse::<u8>()
        .ok()
        .and_then(Position::from_number)
        .filter(|pos| board.is_empty(*pos))
}

/// `Some(true)` for y/yes, `Some(false)` for n/no.
pub(crate) fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

impl<R: BufRead, W: Write> InputProvider for TerminalInput<R, W> {
    #[instrument(skip_all)]
    fn choose_move(&mut self, board: &Board) -> Result<Position, InputClosed> {
        let open: Vec<u8> = board.empty_positions().iter().map(|p| p.number()).collect();
        loop {
            self.say(&format!("Choose a square {}:", joinor(&open, ", ", "or")))?;
            let answer = self.read_answer()?;
            if let Some(pos) = parse_square(&answer, board) {
                debug!(position = %pos, "Human chose square");
                return Ok(pos);
            }
            debug!(answer = %answer, "Rejected square");
            self.say("Sorry, that's not a valid choice.")?;
        }
    }

    #[instrument(skip_all)]
    fn choose_first_mover(&mut self) -> Result<Side, InputClosed> {
        if self.clear {
            clear_screen(&mut self.out).map_err(closed)?;
        }
        self.say("Who will play first?")?;
        self.say("Hit 'p' for player, 'c' for computer")?;
        let side = loop {
            match self.read_answer()?.as_str() {
                "p" => break Side::Human,
                "c" => break Side::Computer,
                _ => self.say("Invalid choice! Try again...")?,
            }
        };

        spacer(&mut self.out, 2).map_err(closed)?;
        self.say(&format!("{} will start playing.", side.to_string().to_uppercase()))?;
        self.say("Press enter to begin the game...")?;
        self.read_answer()?;
        Ok(side)
    }

    fn next_round(&mut self) -> Result<(), InputClosed> {
        self.say("Press enter for the next round...")?;
        self.read_answer().map(|_| ())
    }

    #[instrument(skip_all)]
    fn play_again(&mut self) -> Result<bool, InputClosed> {
        self.say("Play again? (y or n)")?;
        loop {
            if let Some(again) = parse_yes_no(&self.read_answer()?) {
                return Ok(again);
            }
            self.say("Invalid input, please enter either 'y', 'yes' or 'n', 'no'")?;
        }
    }
}
