//! History step invariant: each record changes exactly one cell.

use super::Invariant;
use crate::GameController;
use crate::types::Square;

/// Invariant: history advances one cell at a time.
///
/// The seed record is an empty board with no move metadata. Every later
/// record differs from its predecessor in exactly one cell, at its
/// recorded location, holding its recorded mark.
pub struct SingleStepHistoryInvariant;

impl Invariant<GameController> for SingleStepHistoryInvariant {
    fn holds(controller: &GameController) -> bool {
        let history = controller.history();
        let Some(seed) = history.first() else {
            return false;
        };

        if seed.mark().is_some()
            || seed.location().is_some()
            || seed.board().squares().iter().any(|s| *s != Square::Empty)
        {
            return false;
        }

        for pair in history.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            let (Some(mark), Some(location)) = (next.mark(), next.location()) else {
                return false;
            };

            let mut changed = 0;
            for (pos, (before, after)) in prev
                .board()
                .squares()
                .iter()
                .zip(next.board().squares())
                .enumerate()
            {
                if before != after {
                    changed += 1;
                    if pos != location || *after != Square::Occupied(mark) {
                        return false;
                    }
                }
            }
            if changed != 1 {
                return false;
            }
        }

        true
    }

    fn description() -> &'static str {
        "Each record changes exactly one cell, at its recorded location"
    }
}
