//! One round: alternating placements on a fresh board until a win or a tie.

use crate::collaborator::{InputProvider, MatchEvent, Renderer};
use crate::opponent::{OpponentStrategy, RandomSource};
use crate::rules::detect_round_winner;
use crate::{Board, MatchError, Move, MoveError, Position, RoundOutcome, Score, Side};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Where a round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundState {
    /// Waiting for `Side` to place a marker.
    AwaitingMove(Side),
    /// `Side` completed a line. Terminal.
    Won(Side),
    /// Board filled with no line. Terminal.
    Tied,
}

impl RoundState {
    /// Returns true for `Won` and `Tied`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RoundState::AwaitingMove(_))
    }

    /// The side to move, if the round is still open.
    pub fn active_side(&self) -> Option<Side> {
        match self {
            RoundState::AwaitingMove(side) => Some(*side),
            RoundState::Won(_) | RoundState::Tied => None,
        }
    }

    /// Terminal states as a [`RoundOutcome`].
    pub fn outcome(&self) -> RoundOutcome {
        match self {
            RoundState::AwaitingMove(_) => RoundOutcome::Ongoing,
            RoundState::Won(side) => RoundOutcome::Won(*side),
            RoundState::Tied => RoundOutcome::Tied,
        }
    }
}

/// Board, turn and history of a single round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    board: Board,
    state: RoundState,
    history: Vec<Move>,
}

impl Round {
    /// Empty board with `first_mover` to play.
    pub fn new(first_mover: Side) -> Self {
        Self {
            board: Board::new(),
            state: RoundState::AwaitingMove(first_mover),
            history: Vec::new(),
        }
    }

    /// Places the active side's marker at `pos` and advances the round.
    ///
    /// After the placement the turn passes to the other side, then the board
    /// is checked: a completed line ends the round in a win, a full board in
    /// a tie.
    ///
    /// # Errors
    ///
    /// - [`MoveError::RoundOver`] if the round already ended.
    /// - [`MoveError::Place`] if the cell is taken. The round is unchanged.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn play(&mut self, pos: Position) -> Result<RoundState, MoveError> {
        let side = self.state.active_side().ok_or(MoveError::RoundOver)?;

        self.board.place_at(pos, side)?;
        self.history.push(Move::new(side, pos));

        let next = side.opponent();
        self.state = if let Some(winner) = detect_round_winner(&self.board) {
            RoundState::Won(winner)
        } else if self.board.is_full() {
            RoundState::Tied
        } else {
            RoundState::AwaitingMove(next)
        };

        debug!(side = ?side, position = %pos, next = ?self.state, "Move applied");
        Ok(self.state)
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current state.
    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Placements so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Rebuilds a round from a move list, starting with `first_mover`.
    ///
    /// # Errors
    ///
    /// Fails on the first move that [`Round::play`] rejects.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(first_mover: Side, moves: &[Position]) -> Result<Self, MoveError> {
        let mut round = Self::new(first_mover);
        for pos in moves {
            round.play(*pos)?;
        }
        Ok(round)
    }
}

/// Summary of a finished round.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct RoundReport {
    /// Final board.
    board: Board,
    /// Win or tie.
    outcome: RoundOutcome,
    /// Every placement in order.
    history: Vec<Move>,
}

/// Drives one round, asking the human or the computer for each move.
pub struct RoundController<'a, I, R, S> {
    input: &'a mut I,
    opponent: &'a mut OpponentStrategy<R>,
    renderer: &'a mut S,
}

impl<'a, I, R, S> RoundController<'a, I, R, S>
where
    I: InputProvider,
    R: RandomSource,
    S: Renderer,
{
    /// Borrows the collaborators for one round.
    pub fn new(
        input: &'a mut I,
        opponent: &'a mut OpponentStrategy<R>,
        renderer: &'a mut S,
    ) -> Self {
        Self {
            input,
            opponent,
            renderer,
        }
    }

    /// Plays a round to completion.
    ///
    /// `score` is only passed through to the renderer.
    ///
    /// # Errors
    ///
    /// - [`MatchError::Input`] if the human stops answering.
    /// - [`MatchError::Move`] if the human supplies an illegal cell. The
    ///   round does not re-ask; that is the input provider's job.
    /// - [`MatchError::OpponentStalled`] if the computer has no cell to take.
    #[instrument(skip(self, score))]
    pub fn run(&mut self, first_mover: Side, score: Score) -> Result<RoundReport, MatchError> {
        let mut round = Round::new(first_mover);
        let computer = self.opponent.side();

        while let RoundState::AwaitingMove(side) = round.state() {
            let pos = if side == computer {
                self.opponent
                    .choose_move(round.board())
                    .ok_or(MatchError::OpponentStalled)?
            } else {
                self.renderer.render(&MatchEvent::AwaitingHuman {
                    board: *round.board(),
                    score,
                });
                self.input.choose_move(round.board())?
            };

            round.play(pos).inspect_err(|e| {
                warn!(error = %e, side = ?side, "Move rejected");
            })?;

            self.renderer.render(&MatchEvent::MovePlayed {
                mv: Move::new(side, pos),
                board: *round.board(),
                score,
            });
        }

        let outcome = round.state().outcome();
        info!(%outcome, moves = round.history().len(), board = %round.board(), "Round finished");

        Ok(RoundReport {
            board: round.board,
            outcome,
            history: round.history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opponent::ScriptedSource;
    use crate::{InputClosed, NullRenderer, PlaceError};

    struct Scripted {
        moves: Vec<Position>,
    }

    impl InputProvider for Scripted {
        fn choose_move(&mut self, _board: &Board) -> Result<Position, InputClosed> {
            if self.moves.is_empty() {
                Err(InputClosed)
            } else {
                Ok(self.moves.remove(0))
            }
        }

        fn choose_first_mover(&mut self) -> Result<Side, InputClosed> {
            Ok(Side::Human)
        }

        fn play_again(&mut self) -> Result<bool, InputClosed> {
            Ok(false)
        }
    }

    #[test]
    fn test_turns_alternate() {
        let mut round = Round::new(Side::Human);
        assert_eq!(
            round.play(Position::Center),
            Ok(RoundState::AwaitingMove(Side::Computer))
        );
        assert_eq!(
            round.play(Position::TopLeft),
            Ok(RoundState::AwaitingMove(Side::Human))
        );
        assert_eq!(round.history().len(), 2);
    }

    #[test]
    fn test_occupied_cell_keeps_turn() {
        let mut round = Round::new(Side::Computer);
        round.play(Position::Center).unwrap();
        assert_eq!(
            round.play(Position::Center),
            Err(MoveError::Place(PlaceError::Occupied {
                position: Position::Center
            }))
        );
        assert_eq!(round.state(), RoundState::AwaitingMove(Side::Human));
        assert_eq!(round.history().len(), 1);
    }

    #[test]
    fn test_win_is_terminal() {
        use Position::*;
        let mut round =
            Round::replay(Side::Human, &[TopLeft, Center, TopCenter, BottomLeft, TopRight])
                .unwrap();
        assert_eq!(round.state(), RoundState::Won(Side::Human));
        assert_eq!(round.play(BottomRight), Err(MoveError::RoundOver));
    }

    #[test]
    fn test_tie_is_terminal() {
        use Position::*;
        let round = Round::replay(
            Side::Human,
            &[
                TopLeft, TopCenter, TopRight, Center, MiddleLeft, MiddleRight, BottomCenter,
                BottomLeft, BottomRight,
            ],
        )
        .unwrap();
        assert_eq!(round.state(), RoundState::Tied);
        assert_eq!(round.state().outcome(), RoundOutcome::Tied);
    }

    #[test]
    fn test_controller_computer_blocks_and_wins() {
        use Position::*;
        // Human: 1, 2 (computer blocks 3), then 4 (computer completes 3-5-7).
        let mut input = Scripted {
            moves: vec![TopLeft, TopCenter, MiddleLeft, MiddleRight],
        };
        let mut opponent = OpponentStrategy::new(ScriptedSource::default());
        let mut events: Vec<MatchEvent> = Vec::new();

        let report = RoundController::new(&mut input, &mut opponent, &mut events)
            .run(Side::Human, Score::new())
            .unwrap();

        assert_eq!(*report.outcome(), RoundOutcome::Won(Side::Computer));
        assert_eq!(report.history().len(), 6);
        assert!(input.moves.contains(&MiddleRight));
        let played = events
            .iter()
            .filter(|e| matches!(e, MatchEvent::MovePlayed { .. }))
            .count();
        assert_eq!(played, 6);
    }

    #[test]
    fn test_controller_surfaces_bad_human_move() {
        let mut input = Scripted {
            moves: vec![Position::Center],
        };
        let mut opponent = OpponentStrategy::new(ScriptedSource::default());
        let result = RoundController::new(&mut input, &mut opponent, &mut NullRenderer)
            .run(Side::Computer, Score::new());
        // Computer takes the center first, the human then picks it again.
        assert_eq!(
            result,
            Err(MatchError::Move(MoveError::Place(PlaceError::Occupied {
                position: Position::Center
            })))
        );
    }
}
