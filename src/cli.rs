//! Command-line interface for keypad_games.

use clap::Parser;
use std::path::PathBuf;

/// Keypad Games - tic-tac-toe for two players at one keyboard
#[derive(Parser, Debug)]
#[command(name = "keypad_games")]
#[command(about = "Tic-tac-toe on the numeric keypad layout", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (used only if it exists)
    #[arg(short, long, default_value = "keypad_games.toml")]
    pub config: PathBuf,

    /// Skip the rules banner
    #[arg(long)]
    pub no_rules: bool,
}
