//! Command-line interface for gridlock.

use clap::Parser;
use std::path::PathBuf;

/// Gridlock - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "gridlock")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config with default player names
    #[arg(short, long, default_value = "gridlock.toml")]
    pub config: PathBuf,

    /// Display name for the X player (overrides config)
    #[arg(long)]
    pub player_one: Option<String>,

    /// Display name for the O player (overrides config)
    #[arg(long)]
    pub player_two: Option<String>,

    /// File that receives log output while the TUI is active
    #[arg(long, default_value = "gridlock.log")]
    pub log_file: PathBuf,
}
