//! Error types for moves and matches.

use derive_more::{Display, Error};
use tracing::instrument;

/// A move that the rules do not allow.
///
/// Both variants indicate a defect in whoever chose the index; nothing in
/// normal play produces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The cell at this index already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(usize),

    /// The index is not on the board.
    #[display("Cell {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),
}

impl std::error::Error for MoveError {}

/// Match error with location tracking.
///
/// Raised when a strategy breaks its contract mid-game. Matches are not
/// retried after one of these.
#[derive(Debug, Clone, Display, Error)]
#[display("Match error: {} at {}:{}", message, file, line)]
pub struct MatchError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl MatchError {
    /// Creates a new match error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<MoveError> for MatchError {
    #[track_caller]
    fn from(err: MoveError) -> Self {
        Self::new(format!("Illegal move: {}", err))
    }
}
