//! Draw detection logic for tic-tac-toe.

use super::win::winner;
use crate::state::GameState;

/// Checks if the board is full (all cells occupied).
pub fn is_full(state: &GameState) -> bool {
    state.cells().iter().all(|cell| !cell.is_empty())
}

/// A full board with no winner.
pub fn is_draw(state: &GameState) -> bool {
    is_full(state) && winner(state).is_none()
}
