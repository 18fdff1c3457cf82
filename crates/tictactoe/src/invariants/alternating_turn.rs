//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::super::{Game, Mark, Square};
use super::Invariant;

/// Invariant: marks alternate, starting with X.
///
/// The k-th filled square (in history order) holds X for even k and O for
/// odd k, and the turn marker names the mark for the next k.
pub struct AlternatingTurnInvariant;

fn expected(k: usize) -> Mark {
    if k % 2 == 0 { Mark::X } else { Mark::O }
}

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let boards: Vec<_> = game
            .history()
            .iter()
            .chain(std::iter::once(game.board()))
            .collect();

        for (k, pair) in boards.windows(2).enumerate() {
            let placed = pair[0]
                .squares()
                .iter()
                .zip(pair[1].squares())
                .find_map(|(a, b)| match (a, b) {
                    (Square::Empty, Square::Occupied(mark)) => Some(*mark),
                    _ => None,
                });
            if placed != Some(expected(k)) {
                return false;
            }
        }

        game.to_move() == expected(game.history().len())
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_single_move_holds() {
        let game = Game::new().play(Position::Center);
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.to_move(), Mark::O);
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let game = Game::replay([0, 4, 2, 6, 8]).unwrap();
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.to_move(), Mark::O);
    }

    #[test]
    fn test_same_mark_twice_violates() {
        let mut game = Game::replay([0, 4]).unwrap();
        game.board.set(Position::Center, Square::Occupied(Mark::X));
        assert!(!AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_stale_turn_marker_violates() {
        let mut game = Game::new().play(Position::Center);
        game.to_move = Mark::X;
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
