//! Tic-tac-toe played by pluggable strategies.
//!
//! # Architecture
//!
//! - **State**: [`GameState`] snapshots with pure transitions
//! - **Rules**: win and draw detection over the eight lines ([`rules`])
//! - **Strategies**: [`RandomStrategy`] and the exhaustive minimax
//!   [`OptimalSearchStrategy`], behind the [`Strategy`] trait
//! - **Runners**: [`MatchRunner`] plays one game, [`TournamentRunner`]
//!   plays a batch with alternating seats and keeps a [`Tally`]
//!
//! # Example
//!
//! ```
//! use arena_tictactoe::{Mark, MatchRunner, OptimalSearchStrategy, Outcome};
//!
//! let mut x = OptimalSearchStrategy::new(Mark::X);
//! let mut o = OptimalSearchStrategy::new(Mark::O);
//! let outcome = MatchRunner::new().run(&mut x, &mut o)?;
//! assert_eq!(outcome, Outcome::Draw);
//! # Ok::<(), arena_tictactoe::MatchError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod position;
pub mod rules;
mod runner;
mod state;
mod strategy;
mod tournament;
mod types;

pub use error::{MatchError, MoveError};
pub use position::Position;
pub use runner::{MatchObserver, MatchRunner, MoveEvent, SilentObserver, TranscriptObserver};
pub use state::GameState;
pub use strategy::{
    Agent, DRAW_SCORE, LOSS_SCORE, MovePicker, OptimalSearchStrategy, RandomStrategy, RngPicker,
    Strategy, StrategyKind, WIN_SCORE,
};
pub use tournament::{GameRecord, Tally, TournamentObserver, TournamentRunner};
pub use types::{Cell, Mark, Outcome};
