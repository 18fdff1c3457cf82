//! Error types for the tic-tac-toe engine.

use derive_more::{Display, Error};
use tracing::instrument;

/// A caller asked for a cell outside the board.
///
/// This is the only error the engine raises. Playing an occupied cell or
/// playing after the game ended is not an error; those moves are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Contract violation: cell index {} is outside 0..=8 at {}:{}", index, file, line)]
pub struct ContractViolation {
    /// The rejected cell index.
    pub index: i64,
    /// Line number where the violation was detected.
    pub line: u32,
    /// Source file where the violation was detected.
    pub file: &'static str,
}

impl ContractViolation {
    /// Creates a new violation with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(index: i64) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            index,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
