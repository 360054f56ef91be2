//! Strategy abstraction: anything that maps a [`GameState`] to a move.
//!
//! Two strategies ship with the crate, [`RandomStrategy`] and
//! [`OptimalSearchStrategy`]. [`Agent`] is the closed sum of the two and is
//! what the tournament and the command line construct.

mod minimax;
mod random;

pub use minimax::{DRAW_SCORE, LOSS_SCORE, OptimalSearchStrategy, WIN_SCORE};
pub use random::{MovePicker, RandomStrategy, RngPicker};

use crate::state::GameState;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// A decision function bound to one mark.
pub trait Strategy {
    /// The mark this strategy plays.
    fn mark(&self) -> Mark;

    /// Display name, e.g. `Minimax Agent (X)`.
    fn name(&self) -> String;

    /// Picks a legal move for the mark to move in `state`.
    ///
    /// Returns `None` only when `state` has no legal moves, which callers
    /// must rule out before asking.
    fn choose_move(&mut self, state: &GameState) -> Option<usize>;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn mark(&self) -> Mark {
        (**self).mark()
    }

    fn name(&self) -> String {
        (**self).name()
    }

    fn choose_move(&mut self, state: &GameState) -> Option<usize> {
        (**self).choose_move(state)
    }
}

/// Which built-in strategy to use.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Exhaustive minimax search.
    #[display("Minimax Agent")]
    Optimal,
    /// Uniform choice among legal moves.
    #[display("Random Agent")]
    Random,
}

impl StrategyKind {
    /// Name of this kind of agent playing `mark`.
    pub fn agent_name(self, mark: Mark) -> String {
        format!("{} ({})", self, mark)
    }
}

/// One of the built-in strategies.
#[derive(Debug, Clone)]
pub enum Agent<P> {
    /// Minimax search.
    Optimal(OptimalSearchStrategy),
    /// Random play driven by `P`.
    Random(RandomStrategy<P>),
}

impl<P: MovePicker> Agent<P> {
    /// Builds the strategy named by `kind`. `picker` is dropped for
    /// [`StrategyKind::Optimal`].
    pub fn new(kind: StrategyKind, mark: Mark, picker: P) -> Self {
        match kind {
            StrategyKind::Optimal => Agent::Optimal(OptimalSearchStrategy::new(mark)),
            StrategyKind::Random => Agent::Random(RandomStrategy::new(mark, picker)),
        }
    }

    /// Returns which variant this is.
    pub fn kind(&self) -> StrategyKind {
        match self {
            Agent::Optimal(_) => StrategyKind::Optimal,
            Agent::Random(_) => StrategyKind::Random,
        }
    }
}

impl<P: MovePicker> Strategy for Agent<P> {
    fn mark(&self) -> Mark {
        match self {
            Agent::Optimal(s) => s.mark(),
            Agent::Random(s) => s.mark(),
        }
    }

    fn name(&self) -> String {
        match self {
            Agent::Optimal(s) => s.name(),
            Agent::Random(s) => s.name(),
        }
    }

    fn choose_move(&mut self, state: &GameState) -> Option<usize> {
        match self {
            Agent::Optimal(s) => s.choose_move(state),
            Agent::Random(s) => s.choose_move(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_names() {
        let optimal = Agent::new(StrategyKind::Optimal, Mark::X, RngPicker::seeded(1));
        let random = Agent::new(StrategyKind::Random, Mark::O, RngPicker::seeded(1));
        assert_eq!(optimal.name(), "Minimax Agent (X)");
        assert_eq!(random.name(), "Random Agent (O)");
        assert_eq!(optimal.kind(), StrategyKind::Optimal);
        assert_eq!(random.mark(), Mark::O);
    }

    #[test]
    fn test_boxed_strategy_delegates() {
        let mut boxed: Box<dyn Strategy> = Box::new(OptimalSearchStrategy::new(Mark::X));
        assert_eq!(boxed.mark(), Mark::X);
        assert_eq!(boxed.choose_move(&GameState::new()), Some(0));
    }
}
