//! The game controller: authoritative state, placement, and time travel.

use crate::invariants::assert_invariants;
use crate::record::{MoveLabel, MoveRecord};
use crate::rules::{check_winner, is_full};
use crate::types::{Board, CELLS, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Reasons a placement is refused.
///
/// Surfaced by [`GameController::try_place`]; the void-returning
/// [`GameController::place_mark`] swallows these, since the rendering
/// collaborator is expected to prevent illegal clicks in the first place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// The index is outside the board.
    #[display("Cell {} is outside the board", _0)]
    OutOfBounds(usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The game at the current turn is already decided.
    #[display("Game is already decided")]
    GameOver,
}

impl std::error::Error for PlaceError {}

/// Status of the position at the current turn.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display,
)]
pub enum GameStatus {
    /// Game is ongoing; the contained mark moves next.
    #[display("Next player: {}", _0)]
    InProgress(Mark),
    /// The contained mark completed a line.
    #[display("Winner: {}", _0)]
    Won(Mark),
    /// Board is full with no winner.
    Draw,
}

/// Owns the move history and the turn pointer.
///
/// All state transitions go through this type; everything it returns is
/// a snapshot or a derived value. Operations are synchronous and run to
/// completion; there is never more than one in-flight operation, so the
/// controller holds no locks.
///
/// Whose turn it is derives from turn parity ([`Mark::for_turn`]) and is
/// never stored, so it cannot fall out of sync with the turn pointer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameController {
    pub(crate) history: Vec<MoveRecord>,
    pub(crate) current_turn: usize,
    pub(crate) reverse_display: bool,
}

impl GameController {
    /// Creates a controller with a single seed record (empty board).
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![MoveRecord::seed()],
            current_turn: 0,
            reverse_display: false,
        }
    }

    /// Places the next mark at `index`.
    ///
    /// Illegal placements (occupied cell, decided game, out-of-range
    /// index) are refused without mutating state. Refusal is deliberate
    /// and silent here; use [`try_place`](Self::try_place) to observe the
    /// reason.
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, index: usize) {
        if let Err(refusal) = self.try_place(index) {
            debug!(%refusal, index, "placement refused");
        }
    }

    /// Checked placement: like [`place_mark`](Self::place_mark), but
    /// reports why a placement was refused.
    ///
    /// On success the history is truncated to the current turn (a move
    /// made after rewinding abandons the old future), a fresh board
    /// snapshot is appended, and the turn pointer advances to it.
    ///
    /// # Errors
    ///
    /// Returns a [`PlaceError`] naming the refused precondition. State is
    /// untouched on error.
    pub fn try_place(&mut self, index: usize) -> Result<(), PlaceError> {
        if index >= CELLS {
            return Err(PlaceError::OutOfBounds(index));
        }

        let current = &self.history[self.current_turn];
        if check_winner(current.board()).is_some() {
            return Err(PlaceError::GameOver);
        }
        if !current.board().is_empty(index) {
            return Err(PlaceError::CellOccupied(index));
        }

        // Copy-then-write: past records keep sole ownership of their
        // board snapshots.
        let mark = self.next_mark();
        let mut board = current.board().clone();
        board
            .set(index, Square::Occupied(mark))
            .map_err(|_| PlaceError::OutOfBounds(index))?;

        self.history.truncate(self.current_turn + 1);
        self.history.push(MoveRecord::played(board, mark, index));
        self.current_turn = self.history.len() - 1;

        assert_invariants(self);
        Ok(())
    }

    /// Moves the turn pointer to `turn` without touching history contents.
    ///
    /// Out-of-range targets are refused rather than left as an unchecked
    /// precondition.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, turn: usize) {
        if turn >= self.history.len() {
            warn!(turn, history_len = self.history.len(), "jump target out of range");
            return;
        }
        self.current_turn = turn;
        assert_invariants(self);
    }

    /// Flips the presentation order of [`move_labels`](Self::move_labels).
    pub fn toggle_reverse_display(&mut self) {
        self.reverse_display = !self.reverse_display;
    }

    /// Status of the position at the current turn.
    pub fn status(&self) -> GameStatus {
        if let Some(win) = check_winner(self.board()) {
            return GameStatus::Won(win.mark);
        }
        if is_full(self.board()) {
            return GameStatus::Draw;
        }
        GameStatus::InProgress(self.next_mark())
    }

    /// Cells of the winning line, empty unless [`status`](Self::status)
    /// reports a winner.
    pub fn winning_line(&self) -> Vec<usize> {
        check_winner(self.board())
            .map(|win| win.line.to_vec())
            .unwrap_or_default()
    }

    /// Labeled history entries in display order.
    ///
    /// Lazy and restartable: each call walks the history afresh. The
    /// reverse-display flag only affects iteration order; each label
    /// carries the history index it refers to, so
    /// [`jump_to`](Self::jump_to) targets stay correct either way.
    pub fn move_labels(&self) -> impl Iterator<Item = MoveLabel> + '_ {
        let len = self.history.len();
        let reverse = self.reverse_display;
        (0..len)
            .map(move |i| if reverse { len - 1 - i } else { i })
            .map(move |turn| MoveLabel {
                label: self.history[turn].label(turn),
                turn,
            })
    }

    /// Board at the current turn.
    pub fn board(&self) -> &Board {
        self.history[self.current_turn].board()
    }

    /// The full history of move records, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Index of the active history entry.
    pub fn current_turn(&self) -> usize {
        self.current_turn
    }

    /// True when `turn` is the active history entry.
    pub fn is_current(&self, turn: usize) -> bool {
        turn == self.current_turn
    }

    /// The mark that moves next, derived from turn parity.
    pub fn next_mark(&self) -> Mark {
        Mark::for_turn(self.current_turn)
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}
