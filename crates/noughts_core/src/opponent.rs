//! The computer opponent.
//!
//! A fixed priority list, not a search: complete an own line, block the
//! other side's line, take the center, otherwise pick a random open cell.
//! Lines are scanned in [`WINNING_LINES`] order and the first qualifying
//! line is acted on.

use crate::rules::{count_marker, find_marker, WINNING_LINES};
use crate::{Board, Marker, Position, Side};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Source of uniform choices for the fallback move.
pub trait RandomSource {
    /// Returns an index uniformly distributed in `0..len`. `len` is never 0.
    fn pick(&mut self, len: usize) -> usize;
}

/// [`RandomSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Seeded generator for reproducible play.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from the thread RNG.
    pub fn from_entropy() -> Self {
        Self::seeded(rand::rng().random())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// [`RandomSource`] that replays a fixed list of indices.
///
/// Each index is reduced modulo `len`; once the script runs out it keeps
/// answering 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    picks: VecDeque<usize>,
}

impl ScriptedSource {
    /// Creates a source that answers with `picks` in order.
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }
}

impl RandomSource for ScriptedSource {
    fn pick(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0) % len
    }
}

/// First empty cell of the first line where `side` holds two cells and the
/// third is empty.
#[instrument(skip(board))]
pub fn line_completion(board: &Board, side: Side) -> Option<Position> {
    WINNING_LINES.iter().find_map(|line| {
        let own = count_marker(board, line, Marker::Placed(side));
        let empty = count_marker(board, line, Marker::Empty);
        if own == 2 && empty == 1 {
            find_marker(board, line, Marker::Empty)
        } else {
            None
        }
    })
}

/// Heuristic move selection for one side.
#[derive(Debug, Clone)]
pub struct OpponentStrategy<R> {
    side: Side,
    random: R,
}

impl<R: RandomSource> OpponentStrategy<R> {
    /// Creates a strategy playing the computer side.
    pub fn new(random: R) -> Self {
        Self::for_side(Side::Computer, random)
    }

    /// Creates a strategy playing `side`.
    pub fn for_side(side: Side, random: R) -> Self {
        Self { side, random }
    }

    /// The side this strategy plays.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Picks the next cell, or `None` when the board is full.
    ///
    /// Win now, then block, then center, then a uniform pick among
    /// [`Board::empty_positions`].
    #[instrument(skip(self, board), fields(side = ?self.side))]
    pub fn choose_move(&mut self, board: &Board) -> Option<Position> {
        if let Some(pos) = line_completion(board, self.side) {
            debug!(position = %pos, "Completing own line");
            return Some(pos);
        }

        if let Some(pos) = line_completion(board, self.side.opponent()) {
            debug!(position = %pos, "Blocking opponent line");
            return Some(pos);
        }

        if board.is_empty(Position::CENTER) {
            debug!("Taking center");
            return Some(Position::CENTER);
        }

        let open = board.empty_positions();
        if open.is_empty() {
            return None;
        }
        let pos = open[self.random.pick(open.len())];
        debug!(position = %pos, open = open.len(), "Random fallback");
        Some(pos)
    }
}
