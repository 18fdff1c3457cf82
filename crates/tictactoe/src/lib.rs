//! Tic-tac-toe game engine.
//!
//! A small deterministic state machine: a 3x3 board, a turn marker that
//! alternates X and O, and a status derived from the board (in progress,
//! won on one of eight lines, or tied).
//!
//! # Example
//!
//! ```
//! use tictactoe::{Game, GameStatus, Mark};
//!
//! # fn example() -> Result<(), tictactoe::ContractViolation> {
//! let game = Game::new()
//!     .apply_move(0)?
//!     .apply_move(3)?
//!     .apply_move(1)?
//!     .apply_move(4)?
//!     .apply_move(2)?;
//!
//! assert_eq!(game.status().winner(), Some(Mark::X));
//! assert!(matches!(game.status(), GameStatus::Won { .. }));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod error;
mod game;
mod invariants;
mod kani_support;
mod position;
pub mod rules;
mod status;
mod types;
mod view;

pub use contracts::{
    CellInRange, Contract, GameNotOver, LegalMove, MoveContract, Rejection, CellIsEmpty,
};
pub use error::ContractViolation;
pub use game::Game;
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoardInvariant, TicTacToeInvariants,
};
pub use position::Position;
pub use status::{GameStatus, WinningLine};
pub use types::{Board, Mark, Square};
pub use view::GameView;
