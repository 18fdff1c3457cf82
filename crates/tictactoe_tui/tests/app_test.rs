//! Tests for key handling in the app state.

use crossterm::event::KeyCode;
use tictactoe::{GameStatus, Mark, Position, Square};
use tictactoe_tui::App;

fn press(app: &mut App, keys: &[KeyCode]) {
    for key in keys {
        app.handle_key(*key).expect("keys map to in-range cells");
    }
}

#[test]
fn test_enter_plays_at_cursor() {
    let mut app = App::new();
    press(&mut app, &[KeyCode::Enter]);

    assert_eq!(app.game().board().get(Position::Center), Square::Occupied(Mark::X));
    assert_eq!(app.status_message(), "Player O's turn");
}

#[test]
fn test_arrow_then_space_plays_elsewhere() {
    let mut app = App::new();
    press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Char(' ')]);

    assert_eq!(app.cursor(), Position::TopLeft);
    assert_eq!(app.game().board().get(Position::TopLeft), Square::Occupied(Mark::X));
}

#[test]
fn test_digits_play_cells_and_win() {
    let mut app = App::new();
    // Cells 0, 3, 1, 4, 2 typed as 1-based digits.
    press(
        &mut app,
        &[
            KeyCode::Char('1'),
            KeyCode::Char('4'),
            KeyCode::Char('2'),
            KeyCode::Char('5'),
            KeyCode::Char('3'),
        ],
    );

    assert_eq!(app.game().status().winner(), Some(Mark::X));
    assert_eq!(app.status_message(), "Player X wins!");
    assert_eq!(app.view().winning_line, Some([0, 1, 2]));
}

#[test]
fn test_occupied_cell_keeps_game() {
    let mut app = App::new();
    press(&mut app, &[KeyCode::Enter]);
    let before = app.game().clone();
    press(&mut app, &[KeyCode::Enter]);

    assert_eq!(app.game(), &before);
}

#[test]
fn test_moves_after_tie_are_ignored() {
    let mut app = App::new();
    // 0,1,2,4,3,5,7,6,8 as digits.
    for c in ['1', '2', '3', '5', '4', '6', '8', '7', '9'] {
        press(&mut app, &[KeyCode::Char(c)]);
    }
    assert_eq!(app.game().status(), GameStatus::Tied);
    assert_eq!(app.status_message(), "It's a tie!");

    let before = app.game().clone();
    press(&mut app, &[KeyCode::Char('5')]);
    assert_eq!(app.game(), &before);
}

#[test]
fn test_reset_and_quit() {
    let mut app = App::new();
    press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('r')]);
    assert_eq!(app.game(), &tictactoe::Game::new());
    assert!(!app.should_quit());

    press(&mut app, &[KeyCode::Char('q')]);
    assert!(app.should_quit());
}

#[test]
fn test_unbound_keys_do_nothing() {
    let mut app = App::new();
    press(&mut app, &[KeyCode::Char('z'), KeyCode::Tab, KeyCode::Char('0')]);
    assert_eq!(app, App::new());
}
