//! Error types for board placements, rounds and matches.

use crate::Position;
use derive_more::{Display, Error, From};

/// A placement the board refused.
///
/// Both cases are recoverable: the human path re-asks for a move, the
/// computer path only reaches them through a logic bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlaceError {
    /// The cell number is not one of 1-9.
    #[display("Position {} is out of range (expected 1-9)", value)]
    OutOfRange {
        /// The rejected cell number.
        value: u8,
    },

    /// The cell already holds a marker.
    #[display("Square {} is already occupied", position)]
    Occupied {
        /// The occupied cell.
        position: Position,
    },
}

/// Error returned when a move cannot be applied to a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum MoveError {
    /// The board rejected the placement.
    #[display("{}", _0)]
    Place(PlaceError),

    /// The round already reached a win or a tie.
    #[display("Round is already over")]
    #[from(skip)]
    RoundOver,
}

/// The input collaborator stopped supplying answers (end of input, quit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Error)]
#[display("Input closed")]
pub struct InputClosed;

/// Error that ends a match early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum MatchError {
    /// A move could not be applied.
    #[display("Invalid move: {}", _0)]
    Move(MoveError),

    /// The player walked away.
    #[display("{}", _0)]
    Input(InputClosed),

    /// The computer was asked to move on a full board.
    #[display("Computer has no legal move")]
    #[from(skip)]
    OpponentStalled,
}

impl From<PlaceError> for MatchError {
    fn from(err: PlaceError) -> Self {
        MatchError::Move(MoveError::Place(err))
    }
}

impl MatchError {
    /// Returns true when the match stopped because input ended.
    pub fn is_input_closed(&self) -> bool {
        matches!(self, MatchError::Input(_))
    }
}
