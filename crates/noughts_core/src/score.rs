//! Running score for a match.

use crate::{MatchOutcome, Side};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Rounds won by each side in the current match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Score {
    human: u32,
    computer: u32,
}

impl Score {
    /// Zero-zero score for a fresh match.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a score from explicit counters.
    pub fn from_counts(human: u32, computer: u32) -> Self {
        Self { human, computer }
    }

    /// Rounds won by `side`.
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Human => self.human,
            Side::Computer => self.computer,
        }
    }

    /// Credits `side` with one round win.
    ///
    /// Called once per decisive round; tied rounds never touch the score.
    #[instrument(skip(self))]
    pub fn update(&mut self, side: Side) {
        let counter = match side {
            Side::Human => &mut self.human,
            Side::Computer => &mut self.computer,
        };
        *counter = counter.saturating_add(1);
        info!(human = self.human, computer = self.computer, "Score updated");
    }

    /// Returns the score after `side` wins a round.
    pub fn with_win(mut self, side: Side) -> Self {
        self.update(side);
        self
    }

    /// The side whose counter equals `threshold`, human checked first.
    pub fn match_winner(&self, threshold: u32) -> Option<Side> {
        [Side::Human, Side::Computer]
            .into_iter()
            .find(|side| self.get(*side) == threshold)
    }

    /// Match state at `threshold`.
    pub fn match_outcome(&self, threshold: u32) -> MatchOutcome {
        self.match_winner(threshold)
            .map_or(MatchOutcome::Ongoing, MatchOutcome::Won)
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {} - {} Computer", self.human, self.computer)
    }
}
