//! Gridlock - two-player tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use gridlock::{Cli, MatchConfig, MatchController};

fn main() -> Result<()> {
    // Load .env file (picks up RUST_LOG and friends)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = if cli.config.exists() {
        MatchConfig::from_file(&cli.config)?
    } else {
        MatchConfig::default()
    };
    config.override_names(cli.player_one, cli.player_two);

    let controller = MatchController::with_names(config.player_one(), config.player_two());
    gridlock::tui::run(controller, &cli.log_file)
}
