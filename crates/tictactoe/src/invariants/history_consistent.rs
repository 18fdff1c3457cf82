//! History consistency invariant: history length matches occupied squares.

use super::super::Game;
use super::Invariant;

/// Invariant: one snapshot per occupied square.
///
/// Every accepted move appends exactly one board, and every occupied square
/// came from an accepted move.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        game.history().len() == game.board().occupied()
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}
