//! Batches of matches between the minimax and random strategies.

use crate::error::MatchError;
use crate::runner::{MatchRunner, SilentObserver};
use crate::strategy::{Agent, MovePicker, OptimalSearchStrategy, Strategy, StrategyKind};
use crate::types::{Mark, Outcome};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Result of one tournament game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct GameRecord {
    /// Zero-based game number.
    game: usize,
    /// Mark the minimax strategy played.
    optimal_mark: Mark,
    /// How the game ended.
    outcome: Outcome,
}

impl GameRecord {
    /// Which strategy won, or `None` for a draw.
    pub fn winner_kind(&self) -> Option<StrategyKind> {
        self.outcome.winner().map(|mark| {
            if mark == self.optimal_mark {
                StrategyKind::Optimal
            } else {
                StrategyKind::Random
            }
        })
    }

    /// Display name of the agent seated at `mark`.
    pub fn agent_name(&self, mark: Mark) -> String {
        let kind = if mark == self.optimal_mark {
            StrategyKind::Optimal
        } else {
            StrategyKind::Random
        };
        kind.agent_name(mark)
    }
}

/// Win and draw counts over a batch of games.
///
/// `x_wins + o_wins + draws` counts every game once. `optimal_wins` and
/// `random_wins` split the same wins by strategy instead of by mark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Tally {
    /// Games won by whoever played X.
    x_wins: usize,
    /// Games won by whoever played O.
    o_wins: usize,
    /// Drawn games.
    draws: usize,
    /// Games won by the minimax strategy.
    optimal_wins: usize,
    /// Games won by the random strategy.
    random_wins: usize,
}

impl Tally {
    /// Adds one finished game.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError`] if the record holds an unfinished game. The
    /// tally is left unchanged.
    pub fn record(&mut self, record: &GameRecord) -> Result<(), MatchError> {
        match record.outcome {
            Outcome::Win(Mark::X) => self.x_wins += 1,
            Outcome::Win(Mark::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {
                warn!(game = record.game, "Refusing to tally an unfinished game");
                return Err(MatchError::new(format!(
                    "Game {} has no result to tally",
                    record.game
                )));
            }
        }
        match record.winner_kind() {
            Some(StrategyKind::Optimal) => self.optimal_wins += 1,
            Some(StrategyKind::Random) => self.random_wins += 1,
            None => {}
        }
        Ok(())
    }

    /// Number of games recorded.
    pub fn total(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Hooks for watching a tournament.
pub trait TournamentObserver {
    /// Called before each game with the two agents' names.
    fn on_game_start(&mut self, _game: usize, _x_name: &str, _o_name: &str) {}

    /// Called after each game.
    fn on_game_end(&mut self, _record: &GameRecord) {}
}

impl TournamentObserver for SilentObserver {}

impl<T: TournamentObserver + ?Sized> TournamentObserver for &mut T {
    fn on_game_start(&mut self, game: usize, x_name: &str, o_name: &str) {
        (**self).on_game_start(game, x_name, o_name);
    }

    fn on_game_end(&mut self, record: &GameRecord) {
        (**self).on_game_end(record);
    }
}

/// Plays minimax against random, swapping marks every game.
///
/// Even games seat the minimax strategy at X, odd games at O.
#[derive(Debug)]
pub struct TournamentRunner<P, T = SilentObserver> {
    picker: P,
    observer: T,
}

impl<P: MovePicker> TournamentRunner<P> {
    /// Creates a tournament whose random strategy draws from `picker`.
    pub fn new(picker: P) -> Self {
        Self {
            picker,
            observer: SilentObserver,
        }
    }
}

impl<P: MovePicker, T: TournamentObserver> TournamentRunner<P, T> {
    /// Creates a tournament reporting each game to `observer`.
    pub fn with_observer(picker: P, observer: T) -> Self {
        Self { picker, observer }
    }

    /// Returns the observer.
    pub fn observer(&self) -> &T {
        &self.observer
    }

    /// Plays `games` games and returns the tally.
    ///
    /// Nothing carries over between calls except the state of the picker.
    ///
    /// # Errors
    ///
    /// Propagates the first [`MatchError`].
    #[instrument(skip(self))]
    pub fn run(&mut self, games: usize) -> Result<Tally, MatchError> {
        info!("Starting tournament");
        let mut tally = Tally::default();

        for game in 0..games {
            let optimal_mark = if game % 2 == 0 { Mark::X } else { Mark::O };
            let mut optimal: Agent<&mut P> =
                Agent::Optimal(OptimalSearchStrategy::new(optimal_mark));
            let mut random = Agent::new(
                StrategyKind::Random,
                optimal_mark.opponent(),
                &mut self.picker,
            );

            let mut runner = MatchRunner::new();
            let outcome = match optimal_mark {
                Mark::X => {
                    self.observer
                        .on_game_start(game, &optimal.name(), &random.name());
                    runner.run(&mut optimal, &mut random)?
                }
                Mark::O => {
                    self.observer
                        .on_game_start(game, &random.name(), &optimal.name());
                    runner.run(&mut random, &mut optimal)?
                }
            };

            let record = GameRecord::new(game, optimal_mark, outcome);
            debug!(game, %outcome, winner = ?record.winner_kind(), "Game recorded");
            tally.record(&record)?;
            self.observer.on_game_end(&record);
        }

        info!(
            x_wins = tally.x_wins,
            o_wins = tally.o_wins,
            draws = tally.draws,
            "Tournament finished"
        );
        Ok(tally)
    }
}
