//! Kani arbitrary implementations for tic-tac-toe types.

#[cfg(kani)]
use super::{Board, Mark, Position, Square};

#[cfg(kani)]
impl kani::Arbitrary for Mark {
    fn any() -> Self {
        if kani::any() { Mark::X } else { Mark::O }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Position {
    fn any() -> Self {
        let index: u8 = kani::any();
        kani::assume(index < 9);
        Position::ALL[index as usize]
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Square {
    fn any() -> Self {
        if kani::any() {
            Square::Empty
        } else {
            Square::Occupied(kani::any())
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Board {
    fn any() -> Self {
        let squares: [Square; 9] = kani::any();
        Board::from_squares(squares)
    }
}
