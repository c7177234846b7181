//! Rules engine for first-to-N tic-tac-toe against the computer.
//!
//! # Architecture
//!
//! - **Board**: fixed 3x3 grid of markers ([`Board`], [`Position`])
//! - **Rules**: win and tie detection over the 8 winning lines ([`rules`])
//! - **Opponent**: the computer's win > block > center > random heuristic
//! - **Score**: per-side round wins and the match threshold
//! - **Round / Match**: controllers driving play through the
//!   [`InputProvider`] and [`Renderer`] seams
//!
//! The crate does no I/O. A front end supplies the human's moves and
//! displays [`MatchEvent`]s.
//!
//! # Example
//!
//! ```
//! use noughts_core::{Board, OpponentStrategy, Position, ScriptedSource, Side};
//!
//! let mut board = Board::new();
//! board.place(1, Side::Human)?;
//! board.place(2, Side::Human)?;
//!
//! let mut computer = OpponentStrategy::new(ScriptedSource::default());
//! assert_eq!(computer.choose_move(&board), Some(Position::TopRight));
//! # Ok::<(), noughts_core::PlaceError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod collaborator;
mod config;
mod error;
mod match_controller;
mod opponent;
mod phases;
mod position;
mod round;
pub mod rules;
mod score;
mod types;

pub use action::Move;
pub use collaborator::{InputProvider, MatchEvent, NullRenderer, Renderer};
pub use config::{ConfigError, FirstMoverPolicy, MatchConfig, DEFAULT_WINNING_SCORE};
pub use error::{InputClosed, MatchError, MoveError, PlaceError};
pub use match_controller::{MatchController, MatchSummary};
pub use opponent::{line_completion, OpponentStrategy, RandomSource, RngSource, ScriptedSource};
pub use phases::{MatchOutcome, RoundOutcome};
pub use position::Position;
pub use round::{Round, RoundController, RoundReport, RoundState};
pub use rules::{detect_round_winner, WinningLine, WINNING_LINES};
pub use score::Score;
pub use types::{Board, Marker, Side};
