//! Fixed scenarios for the board, the rules and the computer opponent.

use noughts_core::{
    detect_round_winner, Board, OpponentStrategy, PlaceError, Position, Score, ScriptedSource,
    Side,
};

fn board_with(human: &[u8], computer: &[u8]) -> Board {
    let mut board = Board::new();
    for n in human {
        board.place(*n, Side::Human).expect("free cell");
    }
    for n in computer {
        board.place(*n, Side::Computer).expect("free cell");
    }
    board
}

fn computer() -> OpponentStrategy<ScriptedSource> {
    OpponentStrategy::new(ScriptedSource::default())
}

#[test]
fn test_computer_completes_line() {
    let board = board_with(&[], &[1, 2]);
    assert_eq!(computer().choose_move(&board), Some(Position::TopRight));
}

#[test]
fn test_computer_blocks_line() {
    let board = board_with(&[1, 2], &[]);
    assert_eq!(computer().choose_move(&board), Some(Position::TopRight));
}

#[test]
fn test_computer_takes_center() {
    assert_eq!(computer().choose_move(&Board::new()), Some(Position::Center));
}

#[test]
fn test_human_top_row_wins() {
    let board = board_with(&[1, 2, 3], &[4, 5]);
    assert_eq!(detect_round_winner(&board), Some(Side::Human));
}

#[test]
fn test_match_winner_at_five() {
    let score = Score::from_counts(5, 3);
    assert_eq!(score.match_winner(5), Some(Side::Human));
}

#[test]
fn test_full_board_without_line_is_tie() {
    let board = board_with(&[1, 3, 4, 8, 9], &[2, 5, 6, 7]);
    assert_eq!(detect_round_winner(&board), None);
    assert!(board.is_full());
}

#[test]
fn test_place_errors() {
    let mut board = board_with(&[5], &[]);
    assert_eq!(
        board.place(5, Side::Computer),
        Err(PlaceError::Occupied {
            position: Position::Center
        })
    );
    assert_eq!(
        board.place(42, Side::Computer),
        Err(PlaceError::OutOfRange { value: 42 })
    );
    assert_eq!(board.occupied_positions(), vec![Position::Center]);
}

#[test]
fn test_fallback_follows_scripted_picks() {
    // Center taken, nothing urgent: picks index into the open cells.
    let board = board_with(&[5], &[]);
    let mut strategy = OpponentStrategy::new(ScriptedSource::new([0, 7, 9]));
    assert_eq!(strategy.choose_move(&board), Some(Position::TopLeft));
    assert_eq!(strategy.choose_move(&board), Some(Position::BottomRight));
    // 9 % 8 open cells -> index 1.
    assert_eq!(strategy.choose_move(&board), Some(Position::TopCenter));
}
