//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! board storage so the engine and the contracts can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_LINES, check_winner};

use super::status::GameStatus;
use super::types::{Board, Mark};
use tracing::instrument;

/// Evaluates the status of a board.
///
/// A completed line always takes precedence over a full board.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board, next: Mark) -> GameStatus {
    if let Some((mark, line)) = check_winner(board) {
        GameStatus::Won { mark, line }
    } else if is_full(board) {
        GameStatus::Tied
    } else {
        GameStatus::InProgress(next)
    }
}
