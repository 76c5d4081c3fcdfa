//! Turn pointer invariant: the pointer always addresses a history entry.

use super::Invariant;
use crate::GameController;

/// Invariant: `current_turn` is a valid index into history.
///
/// The seed record guarantees history is never empty, so the pointer
/// always has somewhere to point.
pub struct BoundedTurnPointerInvariant;

impl Invariant<GameController> for BoundedTurnPointerInvariant {
    fn holds(controller: &GameController) -> bool {
        controller.current_turn < controller.history.len()
    }

    fn description() -> &'static str {
        "Turn pointer addresses an existing history entry"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_game_holds() {
        let game = GameController::new();
        assert!(BoundedTurnPointerInvariant::holds(&game));
    }

    #[test]
    fn test_holds_through_play_and_rewind() {
        let mut game = GameController::new();
        for index in [0, 4, 8] {
            game.place_mark(index);
            assert!(BoundedTurnPointerInvariant::holds(&game));
        }
        game.jump_to(0);
        assert!(BoundedTurnPointerInvariant::holds(&game));
    }

    #[test]
    fn test_corrupted_pointer_violates() {
        let mut game = GameController::new();
        game.current_turn = 1;
        assert!(!BoundedTurnPointerInvariant::holds(&game));
    }
}
