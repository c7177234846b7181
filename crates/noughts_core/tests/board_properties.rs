//! Property tests over boards reached by legal alternating play.

use noughts_core::rules::{count_marker, WINNING_LINES};
use noughts_core::{
    detect_round_winner, Board, Marker, OpponentStrategy, PlaceError, Position, Round, RoundState,
    RngSource, Side,
};
use proptest::collection;
use proptest::prelude::*;

/// Plays picks (each reduced modulo the open cells) until the round ends
/// or the picks run out.
fn play(first_mover: Side, picks: &[usize]) -> Round {
    let mut round = Round::new(first_mover);
    for pick in picks {
        if round.state().is_terminal() {
            break;
        }
        let open = round.board().empty_positions();
        let pos = open[pick % open.len()];
        round.play(pos).unwrap();
    }
    round
}

fn side_strategy() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Human), Just(Side::Computer)]
}

fn completed_lines(board: &Board, side: Side) -> usize {
    WINNING_LINES
        .iter()
        .filter(|line| count_marker(board, line, Marker::Placed(side)) == 3)
        .count()
}

proptest! {
    #[test]
    fn prop_at_most_one_winner(
        first in side_strategy(),
        picks in collection::vec(0usize..9, 0..=9),
    ) {
        let round = play(first, &picks);
        let board = round.board();
        let human = completed_lines(board, Side::Human);
        let computer = completed_lines(board, Side::Computer);
        prop_assert!(human == 0 || computer == 0);

        match detect_round_winner(board) {
            Some(Side::Human) => prop_assert!(human > 0),
            Some(Side::Computer) => prop_assert!(computer > 0),
            None => prop_assert_eq!(human + computer, 0),
        }
    }

    #[test]
    fn prop_empty_and_occupied_partition_board(
        first in side_strategy(),
        picks in collection::vec(0usize..9, 0..=9),
    ) {
        let round = play(first, &picks);
        let board = round.board();
        let empty = board.empty_positions();
        let occupied = board.occupied_positions();

        prop_assert_eq!(empty.len() + occupied.len(), 9);
        prop_assert!(empty.iter().all(|pos| !occupied.contains(pos)));
        let mut all: Vec<Position> = empty.iter().chain(occupied.iter()).copied().collect();
        all.sort();
        prop_assert_eq!(all, Position::ALL.to_vec());
        prop_assert_eq!(occupied.len(), round.history().len());
    }

    #[test]
    fn prop_occupied_placement_fails_unchanged(
        first in side_strategy(),
        picks in collection::vec(0usize..9, 1..=9),
        target in 0usize..9,
        side in side_strategy(),
    ) {
        let round = play(first, &picks);
        let mut board = *round.board();
        let occupied = board.occupied_positions();
        let pos = occupied[target % occupied.len()];
        let before = board;

        prop_assert_eq!(
            board.place(pos.number(), side),
            Err(PlaceError::Occupied { position: pos })
        );
        prop_assert_eq!(board, before);
    }

    #[test]
    fn prop_computer_only_picks_open_cells(
        first in side_strategy(),
        picks in collection::vec(0usize..9, 0..=8),
        seed in any::<u64>(),
    ) {
        let round = play(first, &picks);
        let board = round.board();
        let mut computer = OpponentStrategy::new(RngSource::seeded(seed));
        match computer.choose_move(board) {
            Some(pos) => prop_assert!(board.is_empty(pos)),
            None => prop_assert!(board.is_full()),
        }
    }

    #[test]
    fn prop_terminal_state_matches_board(
        first in side_strategy(),
        picks in collection::vec(0usize..9, 0..=9),
    ) {
        let round = play(first, &picks);
        let board = round.board();
        match round.state() {
            RoundState::Won(side) => prop_assert_eq!(detect_round_winner(board), Some(side)),
            RoundState::Tied => {
                prop_assert!(board.is_full());
                prop_assert_eq!(detect_round_winner(board), None);
            }
            RoundState::AwaitingMove(_) => {
                prop_assert!(!board.is_full());
                prop_assert_eq!(detect_round_winner(board), None);
            }
        }
    }
}
