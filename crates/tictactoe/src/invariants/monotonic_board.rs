//! Monotonic board invariant: squares never change once set.

use super::super::{Board, Game, Square};
use super::Invariant;

/// Invariant: each recorded board grows from the previous one by exactly
/// one square going from Empty to a mark, and nothing else changes.
pub struct MonotonicBoardInvariant;

/// Whether `next` is `prev` plus exactly one newly filled square.
fn one_step(prev: &Board, next: &Board) -> bool {
    let mut filled = 0;
    for (a, b) in prev.squares().iter().zip(next.squares()) {
        match (a, b) {
            (a, b) if a == b => {}
            (Square::Empty, Square::Occupied(_)) => filled += 1,
            _ => return false,
        }
    }
    filled == 1
}

impl Invariant<Game> for MonotonicBoardInvariant {
    fn holds(game: &Game) -> bool {
        let mut boards = game.history().iter().chain(std::iter::once(game.board()));
        let Some(first) = boards.next() else {
            return true;
        };
        if *first != Board::new() {
            return false;
        }

        let mut prev = first;
        for next in boards {
            if !one_step(prev, next) {
                return false;
            }
            prev = next;
        }
        true
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
