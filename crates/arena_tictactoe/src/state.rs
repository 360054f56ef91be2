//! Immutable game-state snapshots.

use crate::error::MoveError;
use crate::position::Position;
use crate::types::{Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Snapshot of a board plus the mark due to move.
///
/// Transitions never mutate: [`GameState::apply_move`] returns a fresh
/// state, so lookahead can branch freely from any snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Cells in row-major order (0-8).
    cells: [Cell; Position::COUNT],
    /// Mark to move next.
    turn: Mark,
}

impl GameState {
    /// Creates the empty starting board with X to move.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; Position::COUNT],
            turn: Mark::X,
        }
    }

    /// Plays `indices` in order from the empty board.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] encountered.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Result<Self, MoveError> {
        indices
            .iter()
            .try_fold(Self::new(), |state, &index| state.apply_move(index))
    }

    /// Returns all cells as a read-only snapshot.
    pub fn cells(&self) -> &[Cell; Position::COUNT] {
        &self.cells
    }

    /// Gets the cell at the given index, or `None` off the board.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns the mark due to move.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Every empty index, ascending.
    pub fn legal_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    /// Number of non-empty cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Places the current mark at `index` and passes the turn.
    ///
    /// `self` is left untouched; the successor is returned.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for an index past 8 and
    /// [`MoveError::Occupied`] for a non-empty cell.
    pub fn apply_move(&self, index: usize) -> Result<Self, MoveError> {
        match self.cell(index) {
            None => Err(MoveError::OutOfBounds(index)),
            Some(Cell::Occupied(_)) => Err(MoveError::Occupied(index)),
            Some(Cell::Empty) => {
                let mut next = *self;
                next.cells[index] = Cell::Occupied(self.turn);
                next.turn = self.turn.opponent();
                debug_assert!(next.is_consistent());
                Ok(next)
            }
        }
    }

    /// Checks that marks alternate starting with X and that `turn` agrees.
    ///
    /// X count minus O count must be 0 (X to move) or 1 (O to move).
    pub fn is_consistent(&self) -> bool {
        let count = |mark| {
            self.cells
                .iter()
                .filter(|cell| **cell == Cell::Occupied(mark))
                .count()
        };
        let (x, o) = (count(Mark::X), count(Mark::O));
        match x.checked_sub(o) {
            Some(0) => self.turn == Mark::X,
            Some(1) => self.turn == Mark::O,
            _ => false,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
