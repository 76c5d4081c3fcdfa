//! Alternation invariant: recorded marks follow X, O, X, O, ...

use super::Invariant;
use crate::GameController;
use crate::types::Mark;

/// Invariant: record k holds the mark for turn k - 1.
///
/// The first recorded move is always X, and marks alternate from there.
/// Truncation on rewind preserves this: a branch always resumes at the
/// parity of the turn it branched from.
pub struct AlternatingMarksInvariant;

impl Invariant<GameController> for AlternatingMarksInvariant {
    fn holds(controller: &GameController) -> bool {
        controller
            .history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(turn, record)| record.mark() == Some(Mark::for_turn(turn - 1)))
    }

    fn description() -> &'static str {
        "Recorded marks alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_game_holds() {
        let game = GameController::new();
        assert!(AlternatingMarksInvariant::holds(&game));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut game = GameController::new();
        for index in [0, 1, 4, 3, 8] {
            game.place_mark(index);
        }
        assert!(AlternatingMarksInvariant::holds(&game));
        assert_eq!(game.history()[1].mark(), Some(Mark::X));
        assert_eq!(game.history()[2].mark(), Some(Mark::O));
    }

    #[test]
    fn test_branch_resumes_at_correct_parity() {
        let mut game = GameController::new();
        for index in [0, 1, 4] {
            game.place_mark(index);
        }

        // Rewind to after X's first move; the branch move must be O's.
        game.jump_to(1);
        game.place_mark(8);

        assert!(AlternatingMarksInvariant::holds(&game));
        assert_eq!(game.history()[2].mark(), Some(Mark::O));
    }

    #[test]
    fn test_repeated_mark_violates() {
        let mut game = GameController::new();
        game.place_mark(0);
        game.place_mark(1);

        // Rewrite the second move as another X.
        game.history[2].mark = Some(Mark::X);

        assert!(!AlternatingMarksInvariant::holds(&game));
    }
}
