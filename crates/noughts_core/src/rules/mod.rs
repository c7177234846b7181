//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the round controller and the computer opponent can
//! share them.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie, round_outcome};
pub use win::{count_marker, detect_round_winner, find_marker, WinningLine, WINNING_LINES};
