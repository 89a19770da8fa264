//! Match control: player identities, turn flow, and status reporting.

use derive_getters::Getters;
use gridlock_core::{Board, Game, GameStatus, Mark, PlaceError, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Default display name for the X player.
pub const DEFAULT_PLAYER_ONE: &str = "Player 1";
/// Default display name for the O player.
pub const DEFAULT_PLAYER_TWO: &str = "Player 2";

/// A participant in the match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Display name shown in the status line.
    name: String,
    /// Which mark this player places. Fixed for the life of the match.
    mark: Mark,
}

impl Player {
    fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
        }
    }

    /// Replaces the display name, falling back to the slot default when
    /// the input is empty or whitespace.
    fn rename(&mut self, name: &str, fallback: &str) {
        let name = name.trim();
        self.name = if name.is_empty() {
            fallback.to_string()
        } else {
            name.to_string()
        };
    }
}

/// Successful result of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Match continues; the opponent moves next.
    NextTurn,
    /// The acting player completed a winning triple.
    Won,
    /// The board filled with no winner.
    Drawn,
}

/// Reasons a turn was rejected. The match is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum TurnError {
    /// The chosen cell already holds a mark; the acting player keeps
    /// the turn.
    #[display("Choose a different cell. The {} cell is taken. Still {}'s turn.", position, player)]
    CellTaken {
        /// Position of the occupied cell.
        position: Position,
        /// Name of the player whose turn it still is.
        player: String,
    },
    /// The match has already finished.
    #[display("The match is over. Start a new game to keep playing.")]
    MatchOver,
}

impl std::error::Error for TurnError {}

/// Runs one match: two named players over the game engine.
///
/// Each controller owns its own match, so independent matches can
/// coexist. The presentation layer re-renders the board and
/// [`MatchController::status_line`] after every command.
#[derive(Debug, Clone)]
pub struct MatchController {
    game: Game,
    player_one: Player,
    player_two: Player,
}

impl MatchController {
    /// Creates a match with the default player names. X moves first.
    #[instrument]
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            player_one: Player::new(DEFAULT_PLAYER_ONE, Mark::X),
            player_two: Player::new(DEFAULT_PLAYER_TWO, Mark::O),
        }
    }

    /// Creates a match with custom player names.
    #[instrument]
    pub fn with_names(name1: &str, name2: &str) -> Self {
        let mut controller = Self::new();
        controller.set_player_names(name1, name2);
        controller
    }

    /// Overwrites both display names.
    ///
    /// Marks, turn order, and the board are untouched, so names can be
    /// edited at any time. Empty input falls back to the slot default.
    #[instrument(skip(self))]
    pub fn set_player_names(&mut self, name1: &str, name2: &str) {
        self.player_one.rename(name1, DEFAULT_PLAYER_ONE);
        self.player_two.rename(name2, DEFAULT_PLAYER_TWO);
        info!(
            player_one = %self.player_one.name(),
            player_two = %self.player_two.name(),
            "Player names updated"
        );
    }

    /// Plays the current player's turn at the given position.
    ///
    /// # Errors
    ///
    /// [`TurnError::CellTaken`] if the cell is occupied (the acting
    /// player keeps the turn), or [`TurnError::MatchOver`] once the
    /// match has finished. The match is unchanged on error.
    #[instrument(skip(self), fields(player = %self.current_player().name()))]
    pub fn play_turn(&mut self, pos: Position) -> Result<TurnOutcome, TurnError> {
        let player = self.current_player().name().clone();
        let status = self.game.place(pos).map_err(|err| match err {
            PlaceError::Occupied(position) => {
                warn!(%position, "Cell already taken");
                TurnError::CellTaken { position, player }
            }
            PlaceError::Finished => {
                warn!("Turn played after the match finished");
                TurnError::MatchOver
            }
        })?;

        let outcome = match status {
            GameStatus::InProgress => TurnOutcome::NextTurn,
            GameStatus::Won(_) => TurnOutcome::Won,
            GameStatus::Draw => TurnOutcome::Drawn,
        };
        info!(position = %pos, ?outcome, "Turn completed");
        Ok(outcome)
    }

    /// Starts a new match: clears the board, returns the turn to player
    /// one. Player names survive.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting match");
        self.game.reset();
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    /// Returns the game engine state.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the player holding the given mark.
    pub fn player_for(&self, mark: Mark) -> &Player {
        match mark {
            Mark::X => &self.player_one,
            Mark::O => &self.player_two,
        }
    }

    /// Returns the player whose turn it is.
    ///
    /// Once the match is over this stays on the player who moved last.
    pub fn current_player(&self) -> &Player {
        self.player_for(self.game.to_move())
    }

    /// Returns player one (X).
    pub fn player_one(&self) -> &Player {
        &self.player_one
    }

    /// Returns player two (O).
    pub fn player_two(&self) -> &Player {
        &self.player_two
    }

    /// Returns the winning player, if the match was won.
    pub fn winner(&self) -> Option<&Player> {
        self.game.status().winner().map(|mark| self.player_for(mark))
    }

    /// Returns true once the match has reached a terminal state.
    pub fn is_over(&self) -> bool {
        self.game.is_over()
    }

    /// Returns the status line the presentation layer renders after
    /// every command.
    pub fn status_line(&self) -> String {
        match self.game.status() {
            GameStatus::InProgress => format!("{}'s turn.", self.current_player().name()),
            GameStatus::Won(mark) => format!("{} is the winner!", self.player_for(mark).name()),
            GameStatus::Draw => "It's a draw!".to_string(),
        }
    }
}

impl Default for MatchController {
    fn default() -> Self {
        Self::new()
    }
}
