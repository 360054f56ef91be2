//! Tic-tac-toe arena - CLI entry point.

#![warn(missing_docs)]

use anyhow::Result;
use arena_cli::ArenaConfig;
use arena_cli::cli::{Cli, Command};
use arena_cli::commands;
use clap::Parser;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing(cli.verbose);

    let config = ArenaConfig::load_or_default(&cli.config)?;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Command::Play { x, o, seed, quiet } => {
            let config = config.with_overrides(None, seed, quiet);
            commands::play(&config, x.into(), o.into(), &mut stdout)?;
        }
        Command::Tournament { games, seed, json } => {
            let config = config.with_overrides(games, seed, false);
            commands::tournament(&config, json, &mut stdout)?;
        }
        Command::Demo { seed } => {
            let config = config.with_overrides(None, seed, false);
            commands::demo(&config, &mut stdout)?;
        }
    }

    Ok(())
}

#[instrument]
fn initialize_tracing(verbose: bool) {
    let fallback = if verbose {
        "warn,arena_tictactoe=debug,arena_cli=debug"
    } else {
        "warn,arena_cli=info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Tracing initialized");
}
