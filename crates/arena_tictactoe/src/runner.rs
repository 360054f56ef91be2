//! Drives a single game between two strategies.

use crate::error::MatchError;
use crate::rules;
use crate::state::GameState;
use crate::strategy::Strategy;
use crate::types::{Mark, Outcome};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A move that was just applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct MoveEvent {
    /// Display name of the strategy that moved.
    mover: String,
    /// Mark that was placed.
    mark: Mark,
    /// Cell index chosen.
    index: usize,
    /// State after the move.
    after: GameState,
}

/// Hooks for watching a match without influencing it.
///
/// Every method defaults to doing nothing.
pub trait MatchObserver {
    /// Called once before the first move.
    fn on_match_start(&mut self, _x_name: &str, _o_name: &str, _state: &GameState) {}

    /// Called after each move is applied.
    fn on_move(&mut self, _event: &MoveEvent) {}

    /// Called once with the final result.
    fn on_match_end(&mut self, _outcome: Outcome, _state: &GameState) {}
}

impl<O: MatchObserver + ?Sized> MatchObserver for &mut O {
    fn on_match_start(&mut self, x_name: &str, o_name: &str, state: &GameState) {
        (**self).on_match_start(x_name, o_name, state);
    }

    fn on_move(&mut self, event: &MoveEvent) {
        (**self).on_move(event);
    }

    fn on_match_end(&mut self, outcome: Outcome, state: &GameState) {
        (**self).on_match_end(outcome, state);
    }
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl MatchObserver for SilentObserver {}

/// Observer that records every move.
#[derive(Debug, Clone, Default)]
pub struct TranscriptObserver {
    moves: Vec<MoveEvent>,
}

impl TranscriptObserver {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves recorded so far, in play order.
    pub fn moves(&self) -> &[MoveEvent] {
        &self.moves
    }

    /// Cell indices in play order.
    pub fn indices(&self) -> Vec<usize> {
        self.moves.iter().map(|event| event.index).collect()
    }
}

impl MatchObserver for TranscriptObserver {
    fn on_match_start(&mut self, _x_name: &str, _o_name: &str, _state: &GameState) {
        self.moves.clear();
    }

    fn on_move(&mut self, event: &MoveEvent) {
        self.moves.push(event.clone());
    }
}

/// Runs one game from the empty board to a win or draw.
#[derive(Debug, Clone, Default)]
pub struct MatchRunner<O = SilentObserver> {
    observer: O,
}

impl MatchRunner {
    /// Creates a runner with no observer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O: MatchObserver> MatchRunner<O> {
    /// Creates a runner reporting to `observer`.
    pub fn with_observer(observer: O) -> Self {
        Self { observer }
    }

    /// Returns the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Consumes the runner, returning the observer.
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Plays `x` against `o` and returns the result.
    ///
    /// # Errors
    ///
    /// See [`MatchRunner::run_to_end`].
    pub fn run(
        &mut self,
        x: &mut dyn Strategy,
        o: &mut dyn Strategy,
    ) -> Result<Outcome, MatchError> {
        self.run_to_end(x, o).map(|(outcome, _)| outcome)
    }

    /// Plays `x` against `o`, returning the result and the final board.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError`] if a strategy is bound to the wrong mark,
    /// produces no move on a live board, or picks an illegal cell.
    #[instrument(skip_all, fields(x = %x.name(), o = %o.name()))]
    pub fn run_to_end(
        &mut self,
        x: &mut dyn Strategy,
        o: &mut dyn Strategy,
    ) -> Result<(Outcome, GameState), MatchError> {
        if x.mark() != Mark::X || o.mark() != Mark::O {
            warn!(x_mark = %x.mark(), o_mark = %o.mark(), "Strategies bound to wrong marks");
            return Err(MatchError::new(format!(
                "{} and {} must play X and O respectively",
                x.name(),
                o.name()
            )));
        }

        let mut state = GameState::new();
        info!("Starting match");
        self.observer.on_match_start(&x.name(), &o.name(), &state);

        loop {
            let outcome = rules::outcome(&state);
            if outcome.is_finished() {
                info!(%outcome, moves = state.occupied_count(), "Match finished");
                self.observer.on_match_end(outcome, &state);
                return Ok((outcome, state));
            }

            let mover: &mut dyn Strategy = match state.turn() {
                Mark::X => &mut *x,
                Mark::O => &mut *o,
            };

            let Some(index) = mover.choose_move(&state) else {
                warn!(mover = %mover.name(), "Strategy returned no move");
                return Err(MatchError::new(format!(
                    "{} returned no move on a live board",
                    mover.name()
                )));
            };

            let next = match state.apply_move(index) {
                Ok(next) => next,
                Err(e) => {
                    warn!(mover = %mover.name(), index, error = %e, "Strategy chose an illegal move");
                    return Err(MatchError::from(e));
                }
            };

            debug!(mover = %mover.name(), index, "Move applied");
            self.observer
                .on_move(&MoveEvent::new(mover.name(), state.turn(), index, next));
            state = next;
        }
    }
}
