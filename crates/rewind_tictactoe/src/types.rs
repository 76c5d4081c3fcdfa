//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Board side length. Fixed at build time; there is no runtime
/// reconfiguration.
pub const SIDE: usize = 3;

/// Total number of cells on the board.
pub const CELLS: usize = SIDE * SIDE;

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// The mark that moves at the given turn: X on even turns, O on odd.
    ///
    /// Turn parity is the single source of truth for whose move it is;
    /// nothing in the crate stores a "next mark" field.
    pub fn for_turn(turn: usize) -> Self {
        if turn % 2 == 0 { Mark::X } else { Mark::O }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square holding a player's mark.
    Occupied(Mark),
}

/// A `SIDE` x `SIDE` board snapshot.
///
/// Squares are stored row-major: index `i` is row `i / SIDE`,
/// column `i % SIDE`. A board never changes length, and once a board is
/// recorded in history it is never mutated again; new positions are built
/// by cloning and writing a single square.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; CELLS],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELLS],
        }
    }

    /// Gets the square at `pos`, or `None` when `pos` is off the board.
    pub fn get(&self, pos: usize) -> Option<Square> {
        self.squares.get(pos).copied()
    }

    /// Sets the square at `pos`.
    pub(crate) fn set(&mut self, pos: usize, square: Square) -> Result<(), &'static str> {
        if pos >= CELLS {
            return Err("position out of bounds");
        }
        self.squares[pos] = square;
        Ok(())
    }

    /// Checks if the square at `pos` is empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Maps a cell index to its `(row, column)` coordinates.
    pub fn row_col(pos: usize) -> (usize, usize) {
        (pos / SIDE, pos % SIDE)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_turn_parity() {
        assert_eq!(Mark::for_turn(0), Mark::X);
        assert_eq!(Mark::for_turn(1), Mark::O);
        assert_eq!(Mark::for_turn(4), Mark::X);
        assert_eq!(Mark::for_turn(7), Mark::O);
    }

    #[test]
    fn test_opponent_is_involution() {
        for mark in Mark::iter() {
            assert_ne!(mark.opponent(), mark);
            assert_eq!(mark.opponent().opponent(), mark);
        }
    }

    #[test]
    fn test_mark_display() {
        assert_eq!(Mark::X.to_string(), "X");
        assert_eq!(Mark::O.to_string(), "O");
    }

    #[test]
    fn test_row_col_mapping() {
        assert_eq!(Board::row_col(0), (0, 0));
        assert_eq!(Board::row_col(5), (1, 2));
        assert_eq!(Board::row_col(8), (2, 2));
    }

    #[test]
    fn test_board_bounds() {
        let mut board = Board::new();
        assert!(board.set(CELLS, Square::Occupied(Mark::X)).is_err());
        assert_eq!(board.get(CELLS), None);
        assert!(board.set(0, Square::Occupied(Mark::X)).is_ok());
        assert!(!board.is_empty(0));
    }
}
