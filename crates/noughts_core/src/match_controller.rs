//! Matches: rounds on a shared score until one side reaches the target.

use crate::collaborator::{InputProvider, MatchEvent, Renderer};
use crate::config::{ConfigError, FirstMoverPolicy, MatchConfig};
use crate::opponent::{OpponentStrategy, RandomSource};
use crate::round::{RoundController, RoundReport};
use crate::{Board, InputClosed, MatchError, Score, Side};
use derive_getters::Getters;
use tracing::{debug, info, instrument};

/// Summary of a finished match.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct MatchSummary {
    /// Side that reached the winning score.
    winner: Side,
    /// Final score.
    score: Score,
    /// Side that opened every round.
    first_mover: Side,
    /// Every round played, in order.
    rounds: Vec<RoundReport>,
}

/// Runs matches against the computer.
///
/// Owns the configuration and the computer's strategy; the board and the
/// score live only as long as the round or match that uses them.
#[derive(Debug)]
pub struct MatchController<R> {
    config: MatchConfig,
    opponent: OpponentStrategy<R>,
}

impl<R: RandomSource> MatchController<R> {
    /// Creates a controller with the computer drawing fallback moves from
    /// `random`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` fails validation.
    #[instrument(skip(random))]
    pub fn new(config: MatchConfig, random: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            opponent: OpponentStrategy::new(random),
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Applies the first-mover policy.
    ///
    /// # Errors
    ///
    /// Returns [`InputClosed`] if the policy asks and nobody answers.
    #[instrument(skip(self, input), fields(policy = %self.config.first_mover()))]
    pub fn resolve_first_mover<I: InputProvider>(&self, input: &mut I) -> Result<Side, InputClosed> {
        let side = match self.config.first_mover() {
            FirstMoverPolicy::AlwaysHuman => Side::Human,
            FirstMoverPolicy::AlwaysComputer => Side::Computer,
            FirstMoverPolicy::Ask => input.choose_first_mover()?,
        };
        debug!(first_mover = ?side, "First mover resolved");
        Ok(side)
    }

    /// Plays one match from 0-0 until a side reaches the winning score.
    ///
    /// The first mover is resolved once and opens every round of the match.
    ///
    /// # Errors
    ///
    /// Any [`MatchError`] from a round, or [`MatchError::Input`] if the
    /// player stops answering between rounds.
    #[instrument(skip_all, fields(winning_score = *self.config.winning_score()))]
    pub fn play_match<I, S>(&mut self, input: &mut I, renderer: &mut S) -> Result<MatchSummary, MatchError>
    where
        I: InputProvider,
        S: Renderer,
    {
        let threshold = *self.config.winning_score();
        let first_mover = self.resolve_first_mover(input)?;
        renderer.render(&MatchEvent::MatchStarted {
            first_mover,
            winning_score: threshold,
        });
        info!(first_mover = ?first_mover, "Match started");

        let mut score = Score::new();
        let mut rounds = Vec::new();
        let mut round: u32 = 0;

        loop {
            round += 1;
            renderer.render(&MatchEvent::RoundStarted {
                round,
                board: Board::new(),
                score,
            });

            let report = RoundController::new(input, &mut self.opponent, renderer)
                .run(first_mover, score)?;

            if let Some(winner) = report.outcome().winner() {
                score.update(winner);
            }
            renderer.render(&MatchEvent::RoundOver {
                outcome: *report.outcome(),
                board: *report.board(),
                score,
            });
            rounds.push(report);

            if let Some(winner) = score.match_winner(threshold) {
                info!(winner = ?winner, %score, rounds = rounds.len(), "Match finished");
                renderer.render(&MatchEvent::MatchOver { winner, score });
                return Ok(MatchSummary {
                    winner,
                    score,
                    first_mover,
                    rounds,
                });
            }

            input.next_round()?;
        }
    }

    /// Plays matches until the player declines another one.
    ///
    /// Each match starts from a fresh score.
    ///
    /// # Errors
    ///
    /// Stops at the first [`MatchError`].
    #[instrument(skip_all)]
    pub fn run<I, S>(&mut self, input: &mut I, renderer: &mut S) -> Result<Vec<MatchSummary>, MatchError>
    where
        I: InputProvider,
        S: Renderer,
    {
        let mut summaries = Vec::new();
        loop {
            summaries.push(self.play_match(input, renderer)?);
            if !input.play_again()? {
                info!(matches = summaries.len(), "Session over");
                return Ok(summaries);
            }
        }
    }
}
