//! Application state and logic.

use crate::input::{Action, move_cursor};
use crossterm::event::KeyCode;
use tictactoe::{ContractViolation, Game, GameView, Position};
use tracing::{debug, info, instrument};

/// Main application state.
///
/// The game itself is never edited in place: each engine call returns the
/// next game and the app swaps it in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    game: Game,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game and the cursor centred.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> GameView {
        GameView::from(&self.game)
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> String {
        self.game.status().to_string()
    }

    /// Handles a key press.
    ///
    /// # Errors
    ///
    /// Propagates a [`ContractViolation`] from the engine; digit keys only
    /// produce in-range cells, so this signals a bug in the key mapping.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Result<(), ContractViolation> {
        match Action::from(key) {
            Action::Cursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Action::PlayCursor => {
                let game = std::mem::take(&mut self.game);
                self.game = game.play(self.cursor);
            }
            Action::PlayCell(cell) => {
                self.game = self.game.clone().apply_move(cell)?;
                if let Some(pos) = usize::try_from(cell).ok().and_then(Position::from_index) {
                    self.cursor = pos;
                }
            }
            Action::Reset => self.restart(),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Action::Ignore => {}
        }
        Ok(())
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        let game = std::mem::take(&mut self.game);
        self.game = game.reset();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
