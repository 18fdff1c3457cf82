//! The tic-tac-toe game engine.
//!
//! A [`Game`] is a plain value. Every operation that changes the game
//! consumes it and hands back the next value, so the holder replaces its
//! state wholesale instead of mutating it in place.

use super::contracts::{CellInRange, Contract, MoveContract};
use super::error::ContractViolation;
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::position::Position;
use super::rules;
use super::status::GameStatus;
use super::types::{Board, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One game of tic-tac-toe: board, turn marker and history.
///
/// Deserializing checks the game invariants, so a decoded game is always
/// one that could have been reached by play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameRecord")]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) to_move: Mark,
    pub(crate) history: Vec<Board>,
}

impl Game {
    /// Creates a new game: empty board, X to move, no history.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            history: Vec::new(),
        }
    }

    /// Discards this game and starts a fresh one.
    #[instrument(skip(self))]
    pub fn reset(self) -> Self {
        debug!(moves = self.history.len(), "Resetting game");
        Self::new()
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that plays next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the boards as they were before each accepted move.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Evaluates the current status from the board.
    pub fn status(&self) -> GameStatus {
        rules::evaluate(&self.board, self.to_move)
    }

    /// Whether a move at `pos` would be accepted.
    pub fn is_clickable(&self, pos: Position) -> bool {
        self.board.is_empty(pos) && !self.status().is_terminal()
    }

    /// Positions that would accept a move, in index order.
    pub fn empty_cells(&self) -> Vec<Position> {
        if self.status().is_terminal() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Applies a move at the given cell index (0-8).
    ///
    /// Moves on an occupied cell or after the game ended are ignored and
    /// the game comes back unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation`] if `cell` is outside 0..=8.
    #[track_caller]
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply_move(self, cell: i64) -> Result<Self, ContractViolation> {
        let pos = CellInRange::check(cell)?;
        Ok(self.play(pos))
    }

    /// Applies a move at a position known to be on the board.
    ///
    /// Same no-op rules as [`Game::apply_move`].
    #[instrument(skip(self), fields(position = %pos, player = %self.to_move))]
    pub fn play(self, pos: Position) -> Self {
        if let Err(rejection) = MoveContract::pre(&self, &pos) {
            debug!(%rejection, "Move ignored");
            return self;
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut game = self;
        game.history.push(game.board);
        game.board.set(pos, Square::Occupied(game.to_move));
        game.to_move = game.to_move.opponent();

        #[cfg(debug_assertions)]
        if let Err(violations) = MoveContract::post(&before, &game) {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            panic!("Postcondition failed: {}", descriptions);
        }

        debug!(status = %game.status(), "Move applied");
        game
    }

    /// Replays cell indices from a fresh game.
    ///
    /// # Errors
    ///
    /// Stops at the first out-of-range index.
    #[instrument(skip(cells))]
    pub fn replay<I>(cells: I) -> Result<Self, ContractViolation>
    where
        I: IntoIterator<Item = i64>,
    {
        cells
            .into_iter()
            .try_fold(Self::new(), |game, cell| game.apply_move(cell))
    }
}

/// Unchecked wire form of a [`Game`].
#[derive(Deserialize)]
struct GameRecord {
    board: Board,
    to_move: Mark,
    history: Vec<Board>,
}

impl TryFrom<GameRecord> for Game {
    type Error = String;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        let game = Self {
            board: record.board,
            to_move: record.to_move,
            history: record.history,
        };
        TicTacToeInvariants::check_all(&game).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            format!("Inconsistent game: {}", descriptions)
        })?;
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
