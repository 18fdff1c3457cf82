//! Keyboard mapping.

use crossterm::event::KeyCode;
use tictactoe::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor one step in a direction.
    Cursor(KeyCode),
    /// Play at the cursor.
    PlayCursor,
    /// Play at a cell index typed as a digit.
    PlayCell(i64),
    /// Start a fresh game.
    Reset,
    /// Leave the app.
    Quit,
    /// Key has no binding.
    Ignore,
}

impl From<KeyCode> for Action {
    fn from(key: KeyCode) -> Self {
        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Action::Cursor(key),
            KeyCode::Enter | KeyCode::Char(' ') => Action::PlayCursor,
            KeyCode::Char(c @ '1'..='9') => {
                Action::PlayCell(c.to_digit(10).map_or(0, i64::from) - 1)
            }
            KeyCode::Char('r') | KeyCode::Char('R') => Action::Reset,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
            _ => Action::Ignore,
        }
    }
}

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => (row + 1, col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, col + 1),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}
