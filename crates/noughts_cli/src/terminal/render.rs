//! Screen drawing for match events.

use super::{boxed, clear_screen, prompt, spacer};
use noughts_core::{Board, MatchEvent, Renderer, Score, Side};
use std::io::{self, Write};
use tracing::{debug, warn};

/// Draws match events as plain text.
#[derive(Debug)]
pub struct TerminalRenderer<W> {
    out: W,
    clear: bool,
    winning_score: u32,
}

impl<W: Write> TerminalRenderer<W> {
    /// Creates a renderer writing to `out`, clearing the screen between
    /// frames when `clear` is set.
    pub fn new(out: W, clear: bool) -> Self {
        Self {
            out,
            clear,
            winning_score: noughts_core::DEFAULT_WINNING_SCORE,
        }
    }

    /// Gives back the writer.
    pub fn into_writer(self) -> W {
        self.out
    }

    fn reset_screen(&mut self) -> io::Result<()> {
        if self.clear {
            clear_screen(&mut self.out)?;
        }
        writeln!(self.out, "{}", boxed("  WELCOME TO TIC-TAC-TOE GAME  "))?;
        spacer(&mut self.out, 1)?;
        prompt(
            &mut self.out,
            &format!(
                "You are a {}. Computer is {}.",
                Side::Human.glyph(),
                Side::Computer.glyph()
            ),
        )?;
        spacer(&mut self.out, 1)
    }

    fn draw_board(&mut self, board: &Board) -> io::Result<()> {
        for (row, cells) in board.markers().chunks(3).enumerate() {
            let glyphs: Vec<char> = cells.iter().map(|marker| marker.glyph()).collect();
            writeln!(self.out, "       |     |")?;
            writeln!(
                self.out,
                "    {}  |  {}  |  {}",
                glyphs[0], glyphs[1], glyphs[2]
            )?;
            writeln!(self.out, "       |     |")?;
            if row < 2 {
                writeln!(self.out, "  -----+-----+-----")?;
            }
        }
        Ok(())
    }

    fn draw_score(&mut self, score: &Score) -> io::Result<()> {
        spacer(&mut self.out, 1)?;
        prompt(
            &mut self.out,
            &format!("SCORE (reach {} to win):", self.winning_score),
        )?;
        let line = format!(
            "  PLAYER| {}   -   {} |COMPUTER  ",
            score.get(Side::Human),
            score.get(Side::Computer)
        );
        writeln!(self.out, "{}", boxed(&line))?;
        spacer(&mut self.out, 1)
    }

    fn frame(&mut self, board: &Board, score: &Score) -> io::Result<()> {
        self.reset_screen()?;
        self.draw_board(board)?;
        self.draw_score(score)
    }

    fn draw(&mut self, event: &MatchEvent) -> io::Result<()> {
        match event {
            MatchEvent::MatchStarted { winning_score, .. } => {
                self.winning_score = *winning_score;
            }
            MatchEvent::RoundStarted { round, .. } => {
                debug!(round, "Round started");
            }
            MatchEvent::AwaitingHuman { board, score } => {
                self.frame(board, score)?;
            }
            MatchEvent::MovePlayed { mv, .. } => {
                debug!(%mv, "Move played");
            }
            MatchEvent::RoundOver {
                outcome,
                board,
                score,
            } => {
                if !outcome.is_over() {
                    warn!(%outcome, "Round over event for an unfinished round");
                    return Ok(());
                }
                self.frame(board, score)?;
                prompt(&mut self.out, &outcome.to_string())?;
            }
            MatchEvent::MatchOver { winner, .. } => {
                spacer(&mut self.out, 1)?;
                prompt(&mut self.out, &format!("Game over. {} won!", winner))?;
            }
        }
        self.out.flush()
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, event: &MatchEvent) {
        if let Err(e) = self.draw(event) {
            warn!(error = %e, "Failed to draw event");
        }
    }
}
