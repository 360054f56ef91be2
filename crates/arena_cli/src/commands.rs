//! Command implementations, writing to any [`Write`].

use crate::config::ArenaConfig;
use crate::display::{ConsoleObserver, TournamentPrinter, render_summary};
use anyhow::{Context, Result};
use arena_tictactoe::{
    Agent, Mark, MatchRunner, MovePicker, Outcome, RngPicker, StrategyKind, Tally,
    TournamentRunner,
};
use serde::Serialize;
use std::io::Write;
use tracing::{info, instrument};

/// Picker for the seat at `offset`, so two random seats never share a stream.
fn picker(seed: Option<u64>, offset: u64) -> impl MovePicker {
    match seed {
        Some(seed) => RngPicker::seeded(seed.wrapping_add(offset)),
        None => RngPicker::from_entropy(),
    }
}

/// Tournament result as emitted by `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct TournamentReport {
    /// Games played.
    pub games: usize,
    /// Seed used, if any.
    pub seed: Option<u64>,
    /// Final counts.
    pub tally: Tally,
}

/// Plays one game between `x` and `o`, narrating to `out`.
#[instrument(skip(config, out))]
pub fn play<W: Write>(
    config: &ArenaConfig,
    x: StrategyKind,
    o: StrategyKind,
    out: &mut W,
) -> Result<Outcome> {
    let mut x_agent = Agent::new(x, Mark::X, picker(*config.seed(), 0));
    let mut o_agent = Agent::new(o, Mark::O, picker(*config.seed(), 1));

    let observer = ConsoleObserver::new(&mut *out, *config.show_boards());
    let outcome = MatchRunner::with_observer(observer).run(&mut x_agent, &mut o_agent)?;
    info!(%outcome, "Game complete");
    Ok(outcome)
}

/// Runs the configured tournament and prints results to `out`.
#[instrument(skip(config, out), fields(games = config.games()))]
pub fn tournament<W: Write>(config: &ArenaConfig, json: bool, out: &mut W) -> Result<Tally> {
    let games = *config.games();
    let tally = if json {
        TournamentRunner::new(picker(*config.seed(), 0)).run(games)?
    } else {
        let rule = "=".repeat(50);
        writeln!(out, "\n{rule}\nRunning Tournament: {games} games\n{rule}")?;
        let printer = TournamentPrinter::new(&mut *out);
        TournamentRunner::with_observer(picker(*config.seed(), 0), printer).run(games)?
    };

    if json {
        let report = TournamentReport {
            games,
            seed: *config.seed(),
            tally,
        };
        let text = serde_json::to_string_pretty(&report).context("Failed to encode tally")?;
        writeln!(out, "{}", text)?;
    } else {
        writeln!(out, "\n{}", render_summary(&tally))?;
    }
    Ok(tally)
}

/// Minimax vs random, minimax vs minimax, then a tournament.
#[instrument(skip(config, out))]
pub fn demo<W: Write>(config: &ArenaConfig, out: &mut W) -> Result<()> {
    writeln!(out, "\n>>> Single Game: Minimax vs Random <<<")?;
    play(config, StrategyKind::Optimal, StrategyKind::Random, out)?;

    writeln!(out, "\n>>> Single Game: Minimax vs Minimax <<<")?;
    play(config, StrategyKind::Optimal, StrategyKind::Optimal, out)?;

    tournament(config, false, out)?;
    Ok(())
}
