//! Strictly Console - play tic-tac-toe against the computer.

use anyhow::{Context, Result};
use clap::Parser;
use strictly_console::{Cli, GameConfig, GameRng, Orchestrator, StdConsole};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path).context("Could not start the game")?,
        None => GameConfig::default(),
    };

    let rng = match cli.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    info!(seed = rng.seed(), "Computer randomness seeded");

    let mut game = Orchestrator::from_config(&config, StdConsole::new(), rng)?;
    game.run()?;
    Ok(())
}

/// Logs go to stderr so they never interleave with the board on stdout.
#[instrument]
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Tracing initialized");
}
