//! Core domain types: sides, markers and the board.

use crate::{PlaceError, Position};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Side {
    /// The person at the keyboard (side A, plays `X`).
    #[strum(serialize = "Player")]
    Human,
    /// The automated opponent (side B, plays `O`).
    #[strum(serialize = "Computer")]
    Computer,
}

impl Side {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }

    /// Glyph drawn on the board for this side.
    pub fn glyph(self) -> char {
        match self {
            Side::Human => 'X',
            Side::Computer => 'O',
        }
    }
}

/// Content of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Marker {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell claimed by a side.
    Placed(Side),
}

impl Marker {
    /// Glyph drawn for this marker (a space when empty).
    pub fn glyph(self) -> char {
        match self {
            Marker::Empty => ' ',
            Marker::Placed(side) => side.glyph(),
        }
    }
}

impl From<Side> for Marker {
    fn from(side: Side) -> Self {
        Marker::Placed(side)
    }
}

/// 3x3 board.
///
/// Every cell always holds exactly one [`Marker`]. A placed marker is never
/// overwritten: placements only ever turn `Empty` into `Placed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (index 0-8, cell numbers 1-9).
    cells: [Marker; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Marker::Empty; 9],
        }
    }

    /// Gets the marker at the given position.
    pub fn get(&self, pos: Position) -> Marker {
        self.cells[pos.to_index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Marker::Empty
    }

    /// Returns all cells in row-major order.
    pub fn markers(&self) -> &[Marker; 9] {
        &self.cells
    }

    /// Places `side`'s marker on the cell numbered `number` (1-9).
    ///
    /// # Errors
    ///
    /// - [`PlaceError::OutOfRange`] if `number` is not a cell number.
    /// - [`PlaceError::Occupied`] if the cell already holds a marker.
    ///
    /// The board is left untouched on error.
    #[instrument(skip(self))]
    pub fn place(&mut self, number: u8, side: Side) -> Result<Position, PlaceError> {
        let pos = Position::try_from(number).inspect_err(|_| {
            warn!(number, "Rejected placement outside the board");
        })?;
        self.place_at(pos, side)?;
        Ok(pos)
    }

    /// Places `side`'s marker at a typed position.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::Occupied`] if the cell already holds a marker.
    #[instrument(skip(self))]
    pub fn place_at(&mut self, pos: Position, side: Side) -> Result<(), PlaceError> {
        if !self.is_empty(pos) {
            warn!(position = %pos, "Rejected placement on occupied cell");
            return Err(PlaceError::Occupied { position: pos });
        }
        self.cells[pos.to_index()] = Marker::Placed(side);
        Ok(())
    }

    /// Empty cells in 1..9 order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Occupied cells in 1..9 order.
    pub fn occupied_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| !self.is_empty(*pos))
            .collect()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|m| *m != Marker::Empty)
    }

    /// Number of markers `side` has on the board.
    pub fn count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .filter(|m| **m == Marker::Placed(side))
            .count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            let line: Vec<String> = cells
                .iter()
                .enumerate()
                .map(|(col, marker)| match marker {
                    Marker::Empty => (row * 3 + col + 1).to_string(),
                    Marker::Placed(side) => side.glyph().to_string(),
                })
                .collect();
            write!(f, "{}", line.join("|"))?;
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
