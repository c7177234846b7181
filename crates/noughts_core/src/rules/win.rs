//! Win detection logic for tic-tac-toe.

use crate::{Board, Marker, Position, Side};
use tracing::instrument;

/// Three cells whose uniform occupation wins a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    /// Cells of the line in their own left-to-right / top-to-bottom order.
    pub fn positions(&self) -> &[Position; 3] {
        &self.0
    }
}

/// The 8 winning lines: rows, then columns, then diagonals.
///
/// The computer opponent acts on the first qualifying line, so this order is
/// part of its behavior. Columns run middle, left, right.
pub const WINNING_LINES: [WinningLine; 8] = [
    // Rows
    WinningLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinningLine([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    WinningLine([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    WinningLine([Position::TopCenter, Position::Center, Position::BottomCenter]),
    WinningLine([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    WinningLine([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    WinningLine([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinningLine([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Number of cells in `line` holding `marker` (0-3).
pub fn count_marker(board: &Board, line: &WinningLine, marker: Marker) -> usize {
    line.positions()
        .iter()
        .filter(|pos| board.get(**pos) == marker)
        .count()
}

/// First cell of `line`, in the line's own order, holding `marker`.
pub fn find_marker(board: &Board, line: &WinningLine, marker: Marker) -> Option<Position> {
    line.positions()
        .iter()
        .copied()
        .find(|pos| board.get(*pos) == marker)
}

/// Checks if a side has three in a line.
///
/// Lines are scanned in [`WINNING_LINES`] order and, per line, the human side
/// is checked before the computer. Legal alternating play can never complete
/// lines for both sides, so the first hit is the winner.
#[instrument(skip(board))]
pub fn detect_round_winner(board: &Board) -> Option<Side> {
    WINNING_LINES.iter().find_map(|line| {
        [Side::Human, Side::Computer]
            .into_iter()
            .find(|side| count_marker(board, line, Marker::Placed(*side)) == 3)
    })
}
