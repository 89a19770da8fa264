//! Gridlock library - two-player tic-tac-toe.
//!
//! # Architecture
//!
//! - **Core**: `gridlock_core` owns the board and the turn engine
//! - **Controller**: player identities and status reporting on top of
//!   the engine
//! - **Tui**: ratatui presentation layer (board grid, status line,
//!   restart and new-game flow)
//!
//! # Example
//!
//! ```
//! use gridlock::{MatchController, Position, TurnOutcome};
//!
//! let mut controller = MatchController::with_names("Alice", "Bob");
//! let outcome = controller.play_turn(Position::Center).unwrap();
//! assert_eq!(outcome, TurnOutcome::NextTurn);
//! assert_eq!(controller.status_line(), "Bob's turn.");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod controller;

// Presentation layer
pub mod tui;

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - Configuration
pub use config::{ConfigError, MatchConfig};

// Crate-level exports - Match control
pub use controller::{
    DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO, MatchController, Player, TurnError, TurnOutcome,
};

// Crate-level exports - Game types
pub use gridlock_core::{
    Board, Cell, Game, GameStatus, Mark, PlaceError, Position, PositionError,
};
