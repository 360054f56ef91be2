//! Console rendering of boards, moves and tallies.

use arena_tictactoe::{
    Cell, GameRecord, GameState, Mark, MatchObserver, MoveEvent, Outcome, Position, Tally,
    TournamentObserver, rules,
};
use std::io::Write;
use tracing::warn;

/// Board as three rows of ` X | O |   ` separated by rules.
pub fn render_board(state: &GameState) -> String {
    render_grid(|index| match state.cells()[index] {
        Cell::Empty => " ".to_string(),
        Cell::Occupied(mark) => mark.to_string(),
    })
}

/// Board with every cell showing its index.
pub fn position_guide() -> String {
    render_grid(|index| index.to_string())
}

fn render_grid(symbol: impl Fn(usize) -> String) -> String {
    (0..3)
        .map(|row| {
            let cells: Vec<String> = (0..3).map(|col| symbol(row * 3 + col)).collect();
            format!(" {} | {} | {} ", cells[0], cells[1], cells[2])
        })
        .collect::<Vec<_>>()
        .join("\n-----------\n")
}

/// Final tournament summary.
pub fn render_summary(tally: &Tally) -> String {
    let rule = "=".repeat(50);
    format!(
        "{rule}\nTournament Results:\n  X wins: {}\n  O wins: {}\n  Draws:  {}\n  Minimax wins: {}\n  Random wins:  {}\n{rule}",
        tally.x_wins(),
        tally.o_wins(),
        tally.draws(),
        tally.optimal_wins(),
        tally.random_wins(),
    )
}

fn emit(out: &mut impl Write, text: &str) {
    if let Err(e) = writeln!(out, "{}", text) {
        warn!(error = %e, "Failed to write console output");
    }
}

/// Prints a single match as it is played.
#[derive(Debug)]
pub struct ConsoleObserver<W> {
    out: W,
    show_boards: bool,
    names: [String; 2],
}

impl<W: Write> ConsoleObserver<W> {
    /// Creates an observer writing to `out`.
    pub fn new(out: W, show_boards: bool) -> Self {
        Self {
            out,
            show_boards,
            names: Default::default(),
        }
    }
}

impl<W: Write> MatchObserver for ConsoleObserver<W> {
    fn on_match_start(&mut self, x_name: &str, o_name: &str, _state: &GameState) {
        self.names = [x_name.to_string(), o_name.to_string()];
        let rule = "=".repeat(40);
        emit(
            &mut self.out,
            &format!("{rule}\nStarting Tic Tac Toe!\nX: {x_name}\nO: {o_name}\n{rule}"),
        );
        if self.show_boards {
            emit(&mut self.out, &format!("\nBoard positions:\n{}", position_guide()));
        }
    }

    fn on_move(&mut self, event: &MoveEvent) {
        let label = Position::from_index(*event.index())
            .map(Position::label)
            .unwrap_or("?");
        emit(
            &mut self.out,
            &format!("{} chooses position {} ({})", event.mover(), event.index(), label),
        );
        if self.show_boards {
            emit(&mut self.out, &format!("\n{}\n", render_board(event.after())));
        }
    }

    fn on_match_end(&mut self, outcome: Outcome, state: &GameState) {
        if !self.show_boards {
            emit(&mut self.out, &format!("\n{}\n", render_board(state)));
        }
        let line = match outcome.winner() {
            Some(mark) => {
                let seat = match mark {
                    Mark::X => 0,
                    Mark::O => 1,
                };
                format!("{} wins!", self.names[seat])
            }
            None => "It's a draw!".to_string(),
        };
        emit(&mut self.out, &line);
        if let Some((_, cells)) = rules::winning_line(state) {
            emit(
                &mut self.out,
                &format!("Winning line: {}", render_line(&cells)),
            );
        }
    }
}

/// Labels of a line's cells, comma separated.
pub fn render_line(cells: &[Position; 3]) -> String {
    cells
        .iter()
        .map(|pos| pos.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Prints one line per tournament game.
#[derive(Debug)]
pub struct TournamentPrinter<W> {
    out: W,
}

impl<W: Write> TournamentPrinter<W> {
    /// Creates a printer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> TournamentObserver for TournamentPrinter<W> {
    fn on_game_start(&mut self, game: usize, _x_name: &str, _o_name: &str) {
        emit(&mut self.out, &format!("\n--- Game {} ---", game + 1));
    }

    fn on_game_end(&mut self, record: &GameRecord) {
        let line = match record.outcome().winner() {
            Some(mark) => format!("{} wins!", record.agent_name(mark)),
            None => "Draw!".to_string(),
        };
        emit(&mut self.out, &line);
    }
}
