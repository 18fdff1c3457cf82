//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. A failed precondition is not an error here; the engine
//! answers it by leaving the game unchanged.

use super::error::ContractViolation;
use super::game::Game;
use super::invariants::{InvariantSet, InvariantViolation, TicTacToeInvariants};
use super::position::Position;
use super::status::GameStatus;
use derive_more::Display;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Why a move was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Rejection {
    /// The game already has a terminal status.
    #[display("Game is already over ({})", _0)]
    GameOver(GameStatus),

    /// The target square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the cell index names a square on the board.
///
/// Unlike the other preconditions this one is a caller bug and is reported
/// as a [`ContractViolation`].
pub struct CellInRange;

impl CellInRange {
    /// Converts a raw index into a position.
    #[track_caller]
    #[instrument]
    pub fn check(cell: i64) -> Result<Position, ContractViolation> {
        Position::try_from(cell)
    }
}

/// Precondition: the game has not ended.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects the move with the terminal status if the game has ended.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), Rejection> {
        let status = game.status();
        if status.is_terminal() {
            Err(Rejection::GameOver(status))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target square is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects the move if `pos` already holds a mark.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &Game) -> Result<(), Rejection> {
        if game.board().is_empty(pos) {
            Ok(())
        } else {
            Err(Rejection::SquareOccupied(pos))
        }
    }
}

/// Composite precondition: the game is live and the square is free.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &Game) -> Result<(), Rejection> {
        GameNotOver::check(game)?;
        CellIsEmpty::check(pos, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game is not over
/// - Square must be empty
///
/// Postconditions:
/// - Exactly one snapshot was appended, and it is the board before the move
/// - Board remains monotonic
/// - Marks still alternate
/// - History remains consistent with board
pub struct MoveContract;

impl Contract<Game, Position> for MoveContract {
    fn pre(game: &Game, pos: &Position) -> Result<(), Rejection> {
        LegalMove::check(*pos, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match TicTacToeInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };

        let appended = after.history().len() == before.history().len() + 1
            && after.history().last() == Some(before.board());
        if !appended {
            violations.push(InvariantViolation::new(
                "History gains exactly the pre-move board",
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Square};

    #[test]
    fn test_precondition_empty_square() {
        let game = Game::new();
        assert!(MoveContract::pre(&game, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let game = Game::new().play(Position::Center);
        assert_eq!(
            MoveContract::pre(&game, &Position::Center),
            Err(Rejection::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_game_over_checked_first() {
        let game = Game::replay([0, 3, 1, 4, 2]).unwrap();
        assert!(matches!(
            MoveContract::pre(&game, &Position::TopLeft),
            Err(Rejection::GameOver(GameStatus::Won { mark: Mark::X, .. }))
        ));
    }

    #[test]
    fn test_single_preconditions() {
        let game = Game::new().play(Position::Center);
        assert_eq!(GameNotOver::check(&game), Ok(()));
        assert_eq!(CellIsEmpty::check(Position::TopLeft, &game), Ok(()));
        assert_eq!(
            CellIsEmpty::check(Position::Center, &game),
            Err(Rejection::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_cell_in_range() {
        assert_eq!(CellInRange::check(4), Ok(Position::Center));
        assert!(CellInRange::check(9).is_err());
        assert!(CellInRange::check(i64::MIN).is_err());
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Game::new();
        let after = before.clone().play(Position::Center);
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = Game::new();
        let mut after = before.clone().play(Position::Center);
        after.board.set(Position::TopLeft, Square::Occupied(Mark::O));
        assert!(MoveContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_missing_snapshot() {
        let before = Game::new();
        let mut after = before.clone().play(Position::Center);
        after.history.clear();
        let violations = MoveContract::post(&before, &after).unwrap_err();
        assert!(
            violations
                .iter()
                .any(|v| v.description.contains("pre-move board"))
        );
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            Rejection::SquareOccupied(Position::Center).to_string(),
            "Square Center is already occupied"
        );
        assert_eq!(
            Rejection::GameOver(GameStatus::Tied).to_string(),
            "Game is already over (It's a tie!)"
        );
    }
}
