//! Game rules for tic-tac-toe.
//!
//! Pure functions that derive a game's status from a [`GameState`]. Nothing
//! here is stored on the state; every answer is recomputed from the cells.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, winner, winning_line};

use crate::state::GameState;
use crate::types::Outcome;

/// Returns true once a mark has won or the board is drawn.
pub fn is_terminal(state: &GameState) -> bool {
    winner(state).is_some() || is_draw(state)
}

/// Derives the status of `state`.
pub fn outcome(state: &GameState) -> Outcome {
    match winner(state) {
        Some(mark) => Outcome::Win(mark),
        None if is_full(state) => Outcome::Draw,
        None => Outcome::InProgress,
    }
}
