//! Kani proof harnesses for the engine.
//!
//! These explore every board Kani can construct, not just reachable ones.

#[cfg(kani)]
mod proofs {
    use crate::{Board, Game, GameStatus, Position, rules};

    /// A reported win always names a line of three identical marks.
    #[kani::proof]
    fn verify_win_line_is_uniform() {
        let board: Board = kani::any();
        if let Some((mark, line)) = rules::check_winner(&board) {
            for pos in line.cells() {
                assert_eq!(board.get(pos).mark(), Some(mark));
            }
        }
    }

    /// A tie is only reported on a full board with no line.
    #[kani::proof]
    fn verify_tie_requires_full_board() {
        let board: Board = kani::any();
        let next = kani::any();
        if rules::evaluate(&board, next) == GameStatus::Tied {
            assert!(rules::is_full(&board));
            assert!(rules::check_winner(&board).is_none());
        }
    }

    /// The first move always lands and hands the turn to O.
    #[kani::proof]
    fn verify_first_move_accepted() {
        let pos: Position = kani::any();
        let game = Game::new().play(pos);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.to_move(), crate::Mark::O);
    }
}
