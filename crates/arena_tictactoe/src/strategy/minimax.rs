//! Exhaustive minimax search.

use super::{Strategy, StrategyKind};
use crate::rules;
use crate::state::GameState;
use crate::types::{Mark, Outcome};
use tracing::{debug, instrument, warn};

/// Score of a position this strategy has won.
pub const WIN_SCORE: i32 = 10;
/// Score of a position this strategy has lost.
pub const LOSS_SCORE: i32 = -10;
/// Score of a drawn position.
pub const DRAW_SCORE: i32 = 0;

/// Plays the move with the best minimax score.
///
/// The whole remaining game tree is searched on every call, without
/// pruning, caching or a depth limit. Ties go to the lowest index, so the
/// same state always yields the same move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptimalSearchStrategy {
    mark: Mark,
    opponent: Mark,
}

impl OptimalSearchStrategy {
    /// Creates a search strategy playing `mark`.
    pub fn new(mark: Mark) -> Self {
        Self {
            mark,
            opponent: mark.opponent(),
        }
    }

    /// Returns the opposing mark.
    pub fn opponent(&self) -> Mark {
        self.opponent
    }

    /// Minimax value of `state` from this strategy's point of view.
    ///
    /// `maximizing` is true when this strategy's mark is the one to move.
    /// Always one of [`WIN_SCORE`], [`DRAW_SCORE`], [`LOSS_SCORE`].
    pub fn score(&self, state: &GameState, maximizing: bool) -> i32 {
        match rules::outcome(state) {
            Outcome::Win(mark) if mark == self.mark => WIN_SCORE,
            Outcome::Win(_) => LOSS_SCORE,
            Outcome::Draw => DRAW_SCORE,
            Outcome::InProgress => {
                let children =
                    successors(state).map(|(_, child)| self.score(&child, !maximizing));
                let best = if maximizing {
                    children.max()
                } else {
                    children.min()
                };
                // In progress implies at least one child.
                best.unwrap_or(DRAW_SCORE)
            }
        }
    }

    /// Scores every legal move in ascending index order.
    pub fn evaluate_moves(&self, state: &GameState) -> Vec<(usize, i32)> {
        successors(state)
            .map(|(index, child)| (index, self.score(&child, false)))
            .collect()
    }
}

/// Each legal move paired with the state it leads to.
fn successors(state: &GameState) -> impl Iterator<Item = (usize, GameState)> + '_ {
    state
        .legal_moves()
        .into_iter()
        .filter_map(move |index| match state.apply_move(index) {
            Ok(child) => Some((index, child)),
            Err(e) => {
                warn!(index, error = %e, "Legal move rejected during search");
                debug_assert!(false, "legal move {index} rejected: {e}");
                None
            }
        })
}

impl Strategy for OptimalSearchStrategy {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> String {
        StrategyKind::Optimal.agent_name(self.mark)
    }

    #[instrument(skip(self, state), fields(mark = %self.mark))]
    fn choose_move(&mut self, state: &GameState) -> Option<usize> {
        let scores = self.evaluate_moves(state);
        let best = scores
            .iter()
            .copied()
            .fold(None, |best: Option<(usize, i32)>, (index, score)| {
                match best {
                    Some((_, top)) if score <= top => best,
                    _ => Some((index, score)),
                }
            });
        debug!(?scores, ?best, "Minimax evaluation");
        best.map(|(index, _)| index)
    }
}
