//! Random play with an injected source of randomness.

use super::{Strategy, StrategyKind};
use crate::state::GameState;
use crate::types::Mark;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Source of uniform choices among `len` options.
pub trait MovePicker {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl<P: MovePicker + ?Sized> MovePicker for &mut P {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// [`MovePicker`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngPicker<R>(R);

impl<R: Rng> RngPicker<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngPicker<StdRng> {
    /// Reproducible picker for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Picker seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self(StdRng::from_os_rng())
    }
}

impl<R: Rng> MovePicker for RngPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

/// Plays a uniformly random legal move.
#[derive(Debug, Clone)]
pub struct RandomStrategy<P> {
    mark: Mark,
    picker: P,
}

impl<P: MovePicker> RandomStrategy<P> {
    /// Creates a random strategy for `mark` drawing from `picker`.
    pub fn new(mark: Mark, picker: P) -> Self {
        Self { mark, picker }
    }
}

impl<P: MovePicker> Strategy for RandomStrategy<P> {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> String {
        StrategyKind::Random.agent_name(self.mark)
    }

    #[instrument(skip(self, state), fields(mark = %self.mark))]
    fn choose_move(&mut self, state: &GameState) -> Option<usize> {
        let moves = state.legal_moves();
        if moves.is_empty() {
            return None;
        }
        let choice = moves.get(self.picker.pick(moves.len())).copied();
        debug!(?choice, options = moves.len(), "Random move");
        choice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(usize);

    impl MovePicker for Fixed {
        fn pick(&mut self, _len: usize) -> usize {
            self.0
        }
    }

    #[test]
    fn test_picks_from_legal_moves_only() {
        let state = GameState::replay(&[0, 1, 2]).unwrap();
        let mut strategy = RandomStrategy::new(Mark::O, Fixed(0));
        assert_eq!(strategy.choose_move(&state), Some(3));
    }

    #[test]
    fn test_no_move_on_full_board() {
        let state = GameState::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap();
        let mut strategy = RandomStrategy::new(Mark::X, Fixed(0));
        assert_eq!(strategy.choose_move(&state), None);
    }

    #[test]
    fn test_seeded_picker_is_reproducible() {
        let state = GameState::new();
        let mut a = RandomStrategy::new(Mark::X, RngPicker::seeded(42));
        let mut b = RandomStrategy::new(Mark::X, RngPicker::seeded(42));
        for _ in 0..20 {
            assert_eq!(a.choose_move(&state), b.choose_move(&state));
        }
    }

    #[test]
    fn test_rng_picker_stays_in_range() {
        let mut picker = RngPicker::seeded(7);
        for len in 1..=9 {
            for _ in 0..50 {
                assert!(picker.pick(len) < len);
            }
        }
    }
}
