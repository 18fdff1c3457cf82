//! Derived game status.

use super::position::Position;
use super::types::Mark;
use serde::{Deserialize, Serialize};

/// Three cells that end the game when they hold the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    pub(crate) const fn new(cells: [Position; 3]) -> Self {
        Self(cells)
    }

    /// The three positions of this line.
    pub fn cells(&self) -> [Position; 3] {
        self.0
    }

    /// The three positions as board indices.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Whether the line passes through the given position.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// Current status of the game, derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing; the mark is the one to play next.
    InProgress(Mark),
    /// Game ended with a completed line.
    Won {
        /// The winning mark.
        mark: Mark,
        /// The line that was completed.
        line: WinningLine,
    },
    /// Board is full with no completed line.
    Tied,
}

impl GameStatus {
    /// Returns true once no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }

    /// Returns the mark to play next, if the game is still going.
    pub fn next_mark(&self) -> Option<Mark> {
        match self {
            GameStatus::InProgress(mark) => Some(*mark),
            _ => None,
        }
    }

    /// Returns the winner, if the game is won.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns the completed line, if the game is won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress(mark) => write!(f, "Player {}'s turn", mark),
            GameStatus::Won { mark, .. } => write!(f, "Player {} wins!", mark),
            GameStatus::Tied => write!(f, "It's a tie!"),
        }
    }
}
