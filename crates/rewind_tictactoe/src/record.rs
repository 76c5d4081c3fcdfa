//! History records: board snapshots plus the move that produced them.

use crate::types::{Board, Mark, SIDE};
use serde::{Deserialize, Serialize};

/// One entry in the game history.
///
/// Entry 0 is the seed record: an empty board with no move metadata.
/// Entry k holds the position after the k-th move, the mark placed, and
/// the cell it was placed in. Records are immutable once appended; each
/// owns its board snapshot outright, never aliasing a predecessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub(crate) board: Board,
    pub(crate) mark: Option<Mark>,
    pub(crate) location: Option<usize>,
}

impl MoveRecord {
    /// The seed record at the start of a game.
    pub(crate) fn seed() -> Self {
        Self {
            board: Board::new(),
            mark: None,
            location: None,
        }
    }

    /// A record for a played move.
    pub(crate) fn played(board: Board, mark: Mark, location: usize) -> Self {
        Self {
            board,
            mark: Some(mark),
            location: Some(location),
        }
    }

    /// The board snapshot at this point in history.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark placed by this move, `None` for the seed record.
    pub fn mark(&self) -> Option<Mark> {
        self.mark
    }

    /// The cell the move was placed in, `None` for the seed record.
    pub fn location(&self) -> Option<usize> {
        self.location
    }

    /// Display text for the history list entry at index `turn`.
    pub(crate) fn label(&self, turn: usize) -> String {
        match (self.mark, self.location) {
            (Some(mark), Some(location)) => {
                let (row, col) = (location / SIDE, location % SIDE);
                format!("Go to move #{turn}: {mark} on ({row}, {col})")
            }
            _ => "Go to game start".to_string(),
        }
    }
}

/// A labeled history entry in display order.
///
/// `turn` is the history index to hand back to
/// [`GameController::jump_to`](crate::GameController::jump_to), valid
/// regardless of the presentation order the labels were yielded in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLabel {
    /// Display text for this entry.
    pub label: String,
    /// History index this entry refers to.
    pub turn: usize,
}

impl std::fmt::Display for MoveLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    #[test]
    fn test_seed_label() {
        assert_eq!(MoveRecord::seed().label(0), "Go to game start");
    }

    #[test]
    fn test_played_label_row_col() {
        let mut board = Board::new();
        board.set(5, Square::Occupied(Mark::O)).unwrap();
        let record = MoveRecord::played(board, Mark::O, 5);
        assert_eq!(record.label(2), "Go to move #2: O on (1, 2)");
    }
}
