//! Seams between the match engine and whatever talks to the person.
//!
//! The engine does no I/O. It asks an [`InputProvider`] for decisions and
//! reports what happened to a [`Renderer`] as [`MatchEvent`]s.

use crate::{Board, InputClosed, Move, Position, RoundOutcome, Score, Side};

/// Supplies the human side's decisions.
pub trait InputProvider {
    /// Asks for the human's next cell.
    ///
    /// Implementations re-prompt on bad input themselves and should only
    /// return empty cells; the round still rejects anything else.
    fn choose_move(&mut self, board: &Board) -> Result<Position, InputClosed>;

    /// Asks who places the first marker of the match.
    fn choose_first_mover(&mut self) -> Result<Side, InputClosed>;

    /// Pause between rounds of a match.
    fn next_round(&mut self) -> Result<(), InputClosed> {
        Ok(())
    }

    /// Asks whether to start a fresh match.
    fn play_again(&mut self) -> Result<bool, InputClosed>;
}

/// Something that happened during a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchEvent {
    /// A fresh match began.
    MatchStarted {
        /// Side opening every round of this match.
        first_mover: Side,
        /// Rounds needed to win the match.
        winning_score: u32,
    },
    /// A fresh round began on an empty board.
    RoundStarted {
        /// 1-based round number within the match.
        round: u32,
        /// Current board (empty).
        board: Board,
        /// Score going into the round.
        score: Score,
    },
    /// The human is about to be asked for a move.
    AwaitingHuman {
        /// Board the human is choosing on.
        board: Board,
        /// Score during the round.
        score: Score,
    },
    /// A marker was placed.
    MovePlayed {
        /// The placement.
        mv: Move,
        /// Board after the placement.
        board: Board,
        /// Score during the round.
        score: Score,
    },
    /// A round ended.
    RoundOver {
        /// Win or tie.
        outcome: RoundOutcome,
        /// Final board of the round.
        board: Board,
        /// Score after crediting the winner.
        score: Score,
    },
    /// A side reached the winning score.
    MatchOver {
        /// The match winner.
        winner: Side,
        /// Final score.
        score: Score,
    },
}

/// Consumes match events for display.
pub trait Renderer {
    /// Shows one event.
    fn render(&mut self, event: &MatchEvent);
}

/// Renderer that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _event: &MatchEvent) {}
}

impl Renderer for Vec<MatchEvent> {
    fn render(&mut self, event: &MatchEvent) {
        self.push(event.clone());
    }
}
