//! Turn sequencing and terminal-state evaluation.

use crate::{Board, Mark, Position, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winner.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has reached a terminal state.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winning mark, if the game was won.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }
}

/// Reasons a placement was rejected. The game is unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// The cell at the position already holds a mark.
    #[display("the {} cell is already occupied", _0)]
    Occupied(Position),
    /// The game has already reached a terminal state.
    #[display("the game is already over")]
    Finished,
}

impl std::error::Error for PlaceError {}

/// Tic-tac-toe game engine: board, turn order, and status.
///
/// Each instance owns its own state, so independent games can coexist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Mark,
    status: GameStatus,
    history: Vec<Position>,
}

impl Game {
    /// Creates a new game with an empty board and X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next.
    ///
    /// Once the game is over this stays on the player who moved last.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the positions played, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Returns true once the game has reached a terminal state.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Returns the positions still open for play.
    pub fn open_positions(&self) -> Vec<Position> {
        Position::open_positions(&self.board)
    }

    /// Places the current player's mark and evaluates the result.
    ///
    /// On a win or draw the game transitions to its terminal status and
    /// the turn stays with the player who moved. Otherwise the turn
    /// passes to the opponent.
    ///
    /// # Errors
    ///
    /// [`PlaceError::Finished`] if the game is over, or
    /// [`PlaceError::Occupied`] if the cell is taken. Board, turn, and
    /// status are untouched on error.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn place(&mut self, pos: Position) -> Result<GameStatus, PlaceError> {
        if self.status.is_over() {
            return Err(PlaceError::Finished);
        }
        if !self.board.place(pos, self.to_move) {
            return Err(PlaceError::Occupied(pos));
        }
        self.history.push(pos);

        if let Some(winner) = rules::check_winner(&self.board) {
            debug!(%winner, "game won");
            self.status = GameStatus::Won(winner);
        } else if rules::is_full(&self.board) {
            debug!("game drawn");
            self.status = GameStatus::Draw;
        } else {
            self.to_move = self.to_move.opponent();
        }
        Ok(self.status)
    }

    /// Returns the game to its starting state: empty board, X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.to_move = Mark::X;
        self.status = GameStatus::InProgress;
        self.history.clear();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    /// Plays the given indices in order, asserting each placement succeeds.
    fn play_all(game: &mut Game, indices: &[usize]) {
        for &index in indices {
            let pos = Position::from_index(index).unwrap();
            game.place(pos).unwrap();
        }
    }

    #[test]
    fn test_marks_alternate_starting_with_x() {
        let mut game = Game::new();
        assert_eq!(game.to_move(), Mark::X);
        game.place(Position::TopLeft).unwrap();
        assert_eq!(game.to_move(), Mark::O);
        game.place(Position::Center).unwrap();
        assert_eq!(game.to_move(), Mark::X);
    }

    #[test]
    fn test_mark_counts_never_differ_by_more_than_one() {
        let mut game = Game::new();
        for &index in &[0, 4, 2, 1, 3, 5, 7, 6, 8] {
            let x = game.board().count(Mark::X);
            let o = game.board().count(Mark::O);
            assert!(x.abs_diff(o) <= 1);
            assert!(x + o <= 9);
            let pos = Position::from_index(index).unwrap();
            game.place(pos).unwrap();
        }
    }

    #[test]
    fn test_occupied_cell_leaves_game_unchanged() {
        let mut game = Game::new();
        game.place(Position::TopLeft).unwrap();
        let before = game.clone();

        let result = game.place(Position::TopLeft);
        assert_eq!(result, Err(PlaceError::Occupied(Position::TopLeft)));
        assert_eq!(game, before);
        assert_eq!(game.to_move(), Mark::O);
    }

    #[test]
    fn test_first_column_win_ends_the_game() {
        let mut game = Game::new();
        // X takes 0, 3, 6 while O answers at 1 and 4.
        play_all(&mut game, &[0, 1, 3, 4, 6]);

        assert_eq!(game.status(), GameStatus::Won(Mark::X));
        assert!(game.is_over());
        // Turn did not advance past the winning move.
        assert_eq!(game.to_move(), Mark::X);
        assert_eq!(game.board().get(Position::TopLeft), Cell::Occupied(Mark::X));
        assert_eq!(
            game.board().get(Position::MiddleLeft),
            Cell::Occupied(Mark::X)
        );
        assert_eq!(
            game.board().get(Position::BottomLeft),
            Cell::Occupied(Mark::X)
        );
    }

    #[test]
    fn test_finished_game_rejects_further_play() {
        let mut game = Game::new();
        play_all(&mut game, &[0, 1, 3, 4, 6]);
        let before = game.clone();

        assert_eq!(game.place(Position::BottomRight), Err(PlaceError::Finished));
        assert_eq!(game, before);
    }

    #[test]
    fn test_full_board_without_winner_is_a_draw() {
        let mut game = Game::new();
        // X O X / X O O / O X X: nine legal moves, no triple.
        play_all(&mut game, &[0, 4, 2, 1, 3, 5, 7, 6, 8]);

        assert_eq!(game.status(), GameStatus::Draw);
        assert!(game.is_over());
        assert_eq!(game.status().winner(), None);
    }

    #[test]
    fn test_one_open_cell_without_winner_stays_in_progress() {
        let mut game = Game::new();
        play_all(&mut game, &[0, 4, 2, 1, 3, 5, 7, 6]);

        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.open_positions(), vec![Position::BottomRight]);
    }

    #[test]
    fn test_reset_returns_to_the_starting_state() {
        let mut game = Game::new();
        play_all(&mut game, &[0, 1, 3, 4, 6]);
        game.reset();

        assert_eq!(game, Game::new());
        assert!(game.history().is_empty());
        // The game is playable again after reset.
        game.place(Position::Center).unwrap();
        assert_eq!(game.to_move(), Mark::O);
    }

    #[test]
    fn test_state_survives_a_serde_round_trip() {
        let mut game = Game::new();
        play_all(&mut game, &[4, 0, 8]);

        let json = serde_json::to_string(&game).unwrap();
        let restored: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, game);
    }
}
