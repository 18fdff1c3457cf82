//! Serializable snapshot of a game for presenters.

use super::game::Game;
use super::position::Position;
use super::status::GameStatus;
use super::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Everything a presenter reads from a game, flattened.
///
/// Built from a [`Game`] on demand; holding one does not keep the game alive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Mark in each cell, row-major.
    pub cells: [Option<Mark>; 9],
    /// Derived status.
    pub status: GameStatus,
    /// Indices of the completed line, if the game is won.
    pub winning_line: Option<[usize; 3]>,
    /// Whether each cell would accept a move.
    pub clickable: [bool; 9],
    /// Number of accepted moves so far.
    pub moves: usize,
}

impl GameView {
    /// Returns a status string for display.
    pub fn status_message(&self) -> String {
        self.status.to_string()
    }

    /// Returns true if the game is over.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Whether the cell at `pos` is part of the winning line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.winning_line
            .is_some_and(|line| line.contains(&pos.to_index()))
    }
}

impl From<&Game> for GameView {
    #[instrument(skip(game))]
    fn from(game: &Game) -> Self {
        let status = game.status();
        Self {
            cells: game.board().squares().map(|square| square.mark()),
            status,
            winning_line: status.winning_line().map(|line| line.indices()),
            clickable: Position::ALL.map(|pos| game.is_clickable(pos)),
            moves: game.history().len(),
        }
    }
}
