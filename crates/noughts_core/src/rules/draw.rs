//! Draw detection logic for tic-tac-toe.

use super::win::detect_round_winner;
use crate::{Board, RoundOutcome};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no winner.
pub fn is_tie(board: &Board) -> bool {
    is_full(board) && detect_round_winner(board).is_none()
}

/// Evaluates a board: a win beats a full board.
#[instrument(skip(board))]
pub fn round_outcome(board: &Board) -> RoundOutcome {
    if let Some(side) = detect_round_winner(board) {
        RoundOutcome::Won(side)
    } else if is_full(board) {
        RoundOutcome::Tied
    } else {
        RoundOutcome::Ongoing
    }
}
