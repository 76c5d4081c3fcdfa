//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Mark, SIDE, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of win lines on a `SIDE` x `SIDE` board: one per row and
/// column, plus the two diagonals.
pub const LINE_COUNT: usize = 2 * SIDE + 2;

/// The win-line table, generated for the configured side length at
/// compile time.
///
/// Table order is rows top to bottom, then columns left to right, then
/// the main diagonal, then the anti-diagonal. [`check_winner`] returns
/// the first match in this order.
pub const LINES: [[usize; SIDE]; LINE_COUNT] = build_lines();

const fn build_lines() -> [[usize; SIDE]; LINE_COUNT] {
    let mut lines = [[0usize; SIDE]; LINE_COUNT];
    let mut row = 0;
    while row < SIDE {
        let mut col = 0;
        while col < SIDE {
            lines[row][col] = row * SIDE + col;
            lines[SIDE + col][row] = row * SIDE + col;
            col += 1;
        }
        row += 1;
    }
    let mut i = 0;
    while i < SIDE {
        lines[2 * SIDE][i] = i * SIDE + i;
        lines[2 * SIDE + 1][i] = i * SIDE + (SIDE - 1 - i);
        i += 1;
    }
    lines
}

/// A completed line: the mark that owns it and the cells it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinResult {
    /// The mark with a complete line.
    pub mark: Mark,
    /// Board indices of the winning line.
    pub line: [usize; SIDE],
}

/// Checks the board for a complete line of a single mark.
///
/// Returns the first winning line in table order, or `None` when no
/// line is complete. Pure and total: never fails, never mutates.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<WinResult> {
    for line in LINES {
        let first = board.squares()[line[0]];
        if let Square::Occupied(mark) = first {
            if line.iter().all(|&pos| board.squares()[pos] == first) {
                return Some(WinResult { mark, line });
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Mark)]) -> Board {
        let mut board = Board::new();
        for &(pos, mark) in marks {
            board.set(pos, Square::Occupied(mark)).unwrap();
        }
        board
    }

    #[test]
    fn test_line_table_shape() {
        assert_eq!(LINES.len(), 8);
        assert_eq!(LINES[0], [0, 1, 2]); // top row
        assert_eq!(LINES[3], [0, 3, 6]); // left column
        assert_eq!(LINES[6], [0, 4, 8]); // main diagonal
        assert_eq!(LINES[7], [2, 4, 6]); // anti-diagonal
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let board = board_with(&[
                (line[0], Mark::X),
                (line[1], Mark::X),
                (line[2], Mark::X),
            ]);
            let result = check_winner(&board).expect("line should win");
            assert_eq!(result.mark, Mark::X);
            assert_eq!(result.line, line);
        }
    }

    #[test]
    fn test_winner_anti_diagonal_o() {
        let board = board_with(&[(2, Mark::O), (4, Mark::O), (6, Mark::O)]);
        let result = check_winner(&board).expect("anti-diagonal should win");
        assert_eq!(result.mark, Mark::O);
        assert_eq!(result.line, [2, 4, 6]);
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let board = board_with(&[(0, Mark::X), (1, Mark::X)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_false_positive_mixed_line() {
        // Full board, no three in a row: X O X / X O O / O X X
        let board = board_with(&[
            (0, Mark::X),
            (1, Mark::O),
            (2, Mark::X),
            (3, Mark::X),
            (4, Mark::O),
            (5, Mark::O),
            (6, Mark::O),
            (7, Mark::X),
            (8, Mark::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }
}
