//! Application state and key handling.

use super::input;
use crate::controller::{MatchController, TurnError};
use crossterm::event::{KeyCode, KeyEvent};
use gridlock_core::Position;
use tracing::{debug, info, instrument};

/// Which name field currently has focus in the new-game dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    /// The X player's name field.
    PlayerOne,
    /// The O player's name field.
    PlayerTwo,
}

impl NameField {
    fn toggle(self) -> Self {
        match self {
            NameField::PlayerOne => NameField::PlayerTwo,
            NameField::PlayerTwo => NameField::PlayerOne,
        }
    }
}

/// New-game dialog: two editable name fields.
///
/// Confirming applies both names and starts a fresh match; cancelling
/// leaves the match untouched.
#[derive(Debug, Clone)]
pub struct NameDialog {
    /// Edited name for the X player.
    pub player_one: String,
    /// Edited name for the O player.
    pub player_two: String,
    /// Field receiving keystrokes.
    pub focus: NameField,
}

impl NameDialog {
    fn new(controller: &MatchController) -> Self {
        Self {
            player_one: controller.player_one().name().clone(),
            player_two: controller.player_two().name().clone(),
            focus: NameField::PlayerOne,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            NameField::PlayerOne => &mut self.player_one,
            NameField::PlayerTwo => &mut self.player_two,
        }
    }
}

/// Main application state.
pub struct App {
    controller: MatchController,
    cursor: Position,
    status: String,
    dialog: Option<NameDialog>,
    should_quit: bool,
}

impl App {
    /// Creates the application around an existing match.
    pub fn new(controller: MatchController) -> Self {
        let status = controller.status_line();
        Self {
            controller,
            cursor: Position::Center,
            status,
            dialog: None,
            should_quit: false,
        }
    }

    /// Returns the match controller.
    pub fn controller(&self) -> &MatchController {
        &self.controller
    }

    /// Returns the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Returns the current status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the new-game dialog, if open.
    pub fn dialog(&self) -> Option<&NameDialog> {
        self.dialog.as_ref()
    }

    /// Returns true once the user has asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Routes a key event to the dialog or the board.
    #[instrument(skip(self, key), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.dialog.is_some() {
            self.handle_dialog_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
            KeyCode::Char('n') | KeyCode::Char('N') => self.open_dialog(),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key.code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                // Cells are labelled 1-9 on screen.
                if let Some(digit) = c.to_digit(10)
                    && digit >= 1
                    && let Some(pos) = Position::from_index(digit as usize - 1)
                {
                    self.play(pos);
                }
            }
            _ => {}
        }
    }

    fn play(&mut self, pos: Position) {
        match self.controller.play_turn(pos) {
            Ok(outcome) => {
                debug!(position = %pos, ?outcome, "Turn played");
                self.status = self.controller.status_line();
            }
            Err(err @ TurnError::CellTaken { .. }) => {
                self.status = err.to_string();
            }
            // Board input is inert once the match is over; the final
            // status line stays up until restart or new game.
            Err(TurnError::MatchOver) => {}
        }
    }

    fn restart(&mut self) {
        info!("Restarting match");
        self.controller.reset();
        self.status = self.controller.status_line();
    }

    fn open_dialog(&mut self) {
        debug!("Opening new-game dialog");
        self.dialog = Some(NameDialog::new(&self.controller));
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        let Some(dialog) = self.dialog.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => {
                debug!("New-game dialog cancelled");
                self.dialog = None;
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
                dialog.focus = dialog.focus.toggle();
            }
            KeyCode::Backspace => {
                dialog.focused_mut().pop();
            }
            KeyCode::Enter => {
                let (name1, name2) = (dialog.player_one.clone(), dialog.player_two.clone());
                self.dialog = None;
                self.controller.set_player_names(&name1, &name2);
                self.controller.reset();
                self.status = self.controller.status_line();
                info!("New game started");
            }
            KeyCode::Char(c) => {
                dialog.focused_mut().push(c);
            }
            _ => {}
        }
    }
}
