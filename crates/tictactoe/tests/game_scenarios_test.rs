//! End-to-end game scenarios for the engine.

use tictactoe::{Board, Game, GameStatus, Mark, Position, Square};

#[test]
fn test_top_row_win() {
    let game = Game::replay([0, 3, 1, 4, 2]).expect("indices in range");

    match game.status() {
        GameStatus::Won { mark, line } => {
            assert_eq!(mark, Mark::X);
            assert_eq!(line.indices(), [0, 1, 2]);
        }
        other => panic!("Expected a win, got {:?}", other),
    }
}

#[test]
fn test_sequential_fill_ends_on_anti_diagonal() {
    // X holds 0, 2, 4, 6 after the seventh move: the anti-diagonal closes
    // and the last two moves are ignored.
    let game = Game::replay(0..9).expect("indices in range");

    assert_eq!(game.status().winner(), Some(Mark::X));
    assert_eq!(
        game.status().winning_line().map(|l| l.indices()),
        Some([2, 4, 6])
    );
    assert_eq!(game.history().len(), 7);
    assert!(game.board().is_empty(Position::BottomCenter));
    assert!(game.board().is_empty(Position::BottomRight));
}

#[test]
fn test_full_board_without_line_is_tie() {
    // X O X / X O O / O X X
    let game = Game::replay([0, 1, 2, 4, 3, 5, 7, 6, 8]).expect("indices in range");

    assert_eq!(game.status(), GameStatus::Tied);
    assert_eq!(game.board().occupied(), 9);
    assert_eq!(game.history().len(), 9);
}

#[test]
fn test_last_move_fills_board_and_wins() {
    // X O X / O X O / O X X: the ninth move closes the main diagonal.
    let game = Game::replay([0, 1, 2, 3, 4, 5, 7, 6, 8]).expect("indices in range");

    assert_eq!(game.board().occupied(), 9);
    assert_eq!(game.status().winner(), Some(Mark::X));
    assert_eq!(
        game.status().winning_line().map(|l| l.indices()),
        Some([0, 4, 8])
    );
}

#[test]
fn test_repeat_cell_is_ignored() {
    let first = Game::new().apply_move(0).expect("in range");
    let second = first.clone().apply_move(0).expect("in range");

    assert_eq!(second, first);
    assert_eq!(second.board().get(Position::TopLeft), Square::Occupied(Mark::X));
    assert_eq!(second.to_move(), Mark::O);
}

#[test]
fn test_out_of_range_cells_are_violations() {
    for cell in [9, -1, 100, i64::MAX] {
        let err = Game::new().apply_move(cell).expect_err("out of range");
        assert_eq!(err.index, cell);
        assert!(err.to_string().contains("outside 0..=8"));
    }
}

#[test]
fn test_violation_reports_calling_line() {
    let (err, line) = (Game::new().apply_move(9).unwrap_err(), line!());
    assert_eq!(err.file, file!());
    assert_eq!(err.line, line);
}

#[test]
fn test_reset_equals_new_game() {
    assert_eq!(Game::new().reset(), Game::new());

    let played = Game::replay([0, 3, 1, 4, 2]).expect("in range");
    let reset = played.reset();
    assert_eq!(reset, Game::new());
    assert_eq!(reset.board(), &Board::new());
    assert_eq!(reset.status(), GameStatus::InProgress(Mark::X));
}

#[test]
fn test_o_can_win() {
    let game = Game::replay([0, 2, 1, 4, 8, 6]).expect("in range");

    assert_eq!(game.status().winner(), Some(Mark::O));
    assert_eq!(
        game.status().winning_line().map(|l| l.indices()),
        Some([2, 4, 6])
    );
}
