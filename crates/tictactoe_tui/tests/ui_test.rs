//! Rendering tests against ratatui's test backend.

use crossterm::event::KeyCode;
use ratatui::{Terminal, backend::TestBackend};
use tictactoe_tui::{App, Palette, ui};

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
    terminal
        .draw(|f| ui::draw(f, app, &Palette::default()))
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_new_game_screen() {
    let screen = render(&App::new());
    assert!(screen.contains("Tic Tac Toe"));
    assert!(screen.contains("Player X's turn"));
    // Empty cells show their 1-based numbers.
    assert!(screen.contains('5'));
}

#[test]
fn test_screen_after_win() {
    let mut app = App::new();
    for c in ['1', '4', '2', '5', '3'] {
        app.handle_key(KeyCode::Char(c)).unwrap();
    }
    let screen = render(&app);
    assert!(screen.contains("Player X wins!"));
    assert!(screen.contains('X'));
    assert!(screen.contains('O'));
}
