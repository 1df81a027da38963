//! Keypad Games - console entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use keypad_games::{Console, ConsoleError, Settings, StdinReader};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let mut settings = Settings::load(&cli.config)
        .with_context(|| format!("Failed to load settings from {}", cli.config.display()))?;
    if cli.no_rules {
        settings = settings.without_rules();
    }

    run_game(settings)
}

/// Runs the interactive session on standard input and output.
#[instrument(skip(settings))]
fn run_game(settings: Settings) -> Result<()> {
    let stdout = std::io::stdout().lock();
    let mut console = Console::new(StdinReader::stdin(), stdout, settings);

    match console.run_session() {
        Ok(summary) => {
            info!(%summary, "Goodbye");
            Ok(())
        }
        Err(ConsoleError::InputClosed) => {
            info!("Input closed, ending session");
            Ok(())
        }
        Err(e) => Err(e).context("Game session failed"),
    }
}

/// Logs go to stderr so they never interleave with the game dialogue.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
