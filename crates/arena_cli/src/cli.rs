//! Command-line interface for tictactoe_arena.

use arena_tictactoe::StrategyKind;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Tic-tac-toe arena - pit minimax and random strategies against each other
#[derive(Parser, Debug)]
#[command(name = "tictactoe_arena")]
#[command(about = "Watch tic-tac-toe strategies play each other", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the arena configuration file
    #[arg(short, long, global = true, default_value = "arena.toml")]
    pub config: PathBuf,

    /// Enable debug logging for the game engine
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a single game
    Play {
        /// Strategy playing X
        #[arg(long, value_enum, default_value = "optimal")]
        x: StrategyArg,

        /// Strategy playing O
        #[arg(long, value_enum, default_value = "random")]
        o: StrategyArg,

        /// Seed for random strategies
        #[arg(long)]
        seed: Option<u64>,

        /// Only print moves and the result, not the board after each move
        #[arg(short, long)]
        quiet: bool,
    },

    /// Run a minimax-versus-random tournament with alternating seats
    Tournament {
        /// Number of games (overrides the config file)
        #[arg(short, long)]
        games: Option<usize>,

        /// Seed for the random strategy
        #[arg(long)]
        seed: Option<u64>,

        /// Print the tally as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Minimax vs random, minimax vs minimax, then a tournament
    Demo {
        /// Seed for random strategies
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Strategy choice on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Exhaustive minimax search
    Optimal,
    /// Uniformly random legal moves
    Random,
}

impl From<StrategyArg> for StrategyKind {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Optimal => StrategyKind::Optimal,
            StrategyArg::Random => StrategyKind::Random,
        }
    }
}
