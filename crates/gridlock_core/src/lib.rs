//! Pure tic-tac-toe match logic.
//!
//! This crate owns the board, the marks placed on it, and the turn
//! sequencing engine. It performs no I/O: presentation layers render
//! from the query surface ([`Game::board`], [`Game::to_move`],
//! [`Game::status`]) and drive play through [`Game::place`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod game;
mod position;
pub mod rules;

pub use board::{Board, Cell, Mark};
pub use game::{Game, GameStatus, PlaceError};
pub use position::{Position, PositionError};
