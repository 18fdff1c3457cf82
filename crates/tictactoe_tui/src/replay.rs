//! Non-interactive replay of a move list.

use tictactoe::{Game, GameView};
use tracing::{info, instrument};

/// Plays `cells` on a fresh game and formats the outcome.
///
/// # Errors
///
/// Fails on the first cell index outside 0..=8.
#[instrument]
pub fn run(cells: &[i64], json: bool) -> anyhow::Result<String> {
    let game = Game::replay(cells.iter().copied())?;
    let view = GameView::from(&game);
    info!(moves = view.moves, status = %view.status, "Replay finished");

    if json {
        Ok(serde_json::to_string_pretty(&view)?)
    } else {
        Ok(format!("{}\n\n{}", game.board().display(), view.status_message()))
    }
}
