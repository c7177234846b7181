//! Round and match outcomes.

use crate::Side;
use serde::{Deserialize, Serialize};

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Nobody has three in a line and cells remain.
    Ongoing,
    /// A side completed a line.
    Won(Side),
    /// Board full, no line.
    Tied,
}

impl RoundOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Side> {
        match self {
            RoundOutcome::Won(side) => Some(*side),
            RoundOutcome::Ongoing | RoundOutcome::Tied => None,
        }
    }

    /// Returns true once the round can take no more moves.
    pub fn is_over(&self) -> bool {
        !matches!(self, RoundOutcome::Ongoing)
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundOutcome::Ongoing => write!(f, "Round in progress"),
            RoundOutcome::Won(side) => write!(f, "{} won the round!", side),
            RoundOutcome::Tied => write!(f, "It's a tie!"),
        }
    }
}

/// Result of checking a score against the winning threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// No side has reached the threshold.
    Ongoing,
    /// A side reached the threshold.
    Won(Side),
}

impl MatchOutcome {
    /// Returns the match winner if there is one.
    pub fn winner(&self) -> Option<Side> {
        match self {
            MatchOutcome::Won(side) => Some(*side),
            MatchOutcome::Ongoing => None,
        }
    }
}
