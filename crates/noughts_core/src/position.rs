//! Cell identifiers for the 3×3 board.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the board, numbered 1-9 in row-major order.
///
/// Positions are the only way to address the board, so an out-of-range
/// cell can only come from raw numeric input (see [`Position::from_number`]).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (cell 1)
    TopLeft,
    /// Top-center (cell 2)
    TopCenter,
    /// Top-right (cell 3)
    TopRight,
    /// Middle-left (cell 4)
    MiddleLeft,
    /// Center (cell 5)
    Center,
    /// Middle-right (cell 6)
    MiddleRight,
    /// Bottom-left (cell 7)
    BottomLeft,
    /// Bottom-center (cell 8)
    BottomCenter,
    /// Bottom-right (cell 9)
    BottomRight,
}

impl Position {
    /// All 9 positions in 1..9 order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// The center cell, preferred by the computer when nothing is urgent.
    pub const CENTER: Position = Position::Center;

    /// Label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Array index backing this cell (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Cell number as shown to the player (1-9).
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Creates a position from its cell number (1-9).
    #[instrument]
    pub fn from_number(number: u8) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(usize::from(index)).copied())
    }

    /// Creates a position from a board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl TryFrom<u8> for Position {
    type Error = crate::PlaceError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_number(value).ok_or(crate::PlaceError::OutOfRange { value })
    }
}
