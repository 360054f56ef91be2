//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::state::GameState;
use crate::types::Mark;

/// The eight triples, checked in this order: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line held entirely by one mark, with that mark.
pub fn winning_line(state: &GameState) -> Option<(Mark, [Position; 3])> {
    let cells = state.cells();
    LINES.iter().find_map(|&(line @ [a, b, c])| {
        let mark = cells[a.to_index()].mark()?;
        (cells[b.to_index()].mark() == Some(mark) && cells[c.to_index()].mark() == Some(mark))
            .then_some((mark, line))
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if the mark has three in a row,
/// `None` otherwise.
pub fn winner(state: &GameState) -> Option<Mark> {
    winning_line(state).map(|(mark, _)| mark)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&GameState::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let state = GameState::replay(&[0, 3, 1, 4, 2]).unwrap();
        assert_eq!(winner(&state), Some(Mark::X));
    }

    #[test]
    fn test_winner_diagonal() {
        // O takes 2 4 6
        let state = GameState::replay(&[0, 2, 1, 4, 8, 6]).unwrap();
        assert_eq!(
            winning_line(&state),
            Some((
                Mark::O,
                [Position::TopRight, Position::Center, Position::BottomLeft]
            ))
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let state = GameState::replay(&[0, 4, 1]).unwrap();
        assert_eq!(winner(&state), None);
    }
}
