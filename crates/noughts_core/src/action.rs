//! Placement records.

use crate::{Position, Side};
use serde::{Deserialize, Serialize};

/// One placement: a side putting its marker on a cell.
///
/// Rounds keep these in order so a finished round can be reviewed or
/// replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The side that played.
    pub side: Side,
    /// The cell it claimed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(side: Side, position: Position) -> Self {
        Self { side, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.side, self.position.label())
    }
}
