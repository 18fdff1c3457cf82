//! Win detection logic for tic-tac-toe.

use super::super::status::WinningLine;
use super::super::{Board, Mark, Position, Square};
use tracing::instrument;

/// The eight lines, checked in this order: rows, then columns, then diagonals.
pub const WINNING_LINES: [WinningLine; 8] = [
    // Rows
    WinningLine::new([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinningLine::new([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    WinningLine::new([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    WinningLine::new([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    WinningLine::new([Position::TopCenter, Position::Center, Position::BottomCenter]),
    WinningLine::new([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    WinningLine::new([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinningLine::new([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Checks if there is a winner on the board.
///
/// Returns the first completed line in [`WINNING_LINES`] order together with
/// its mark, or `None` if no line is complete.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<(Mark, WinningLine)> {
    WINNING_LINES.iter().find_map(|line| {
        let [a, b, c] = line.cells();
        match board.get(a) {
            Square::Occupied(mark) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                Some((mark, *line))
            }
            _ => None,
        }
    })
}
