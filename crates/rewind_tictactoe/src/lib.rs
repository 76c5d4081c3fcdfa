//! Tic-tac-toe game logic with full move history and time travel.
//!
//! The crate is pure state-machine logic: no rendering, no event loop,
//! no I/O. A rendering collaborator drives the [`GameController`] with
//! plain method calls and redraws from the snapshots it returns.
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Square`], [`Board`] value types
//! - **Rules**: pure win/draw evaluation of a board snapshot
//! - **Controller**: authoritative state, placement, and rewind/branch
//! - **Invariants**: first-class, independently testable system guarantees
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameController, GameStatus, Mark};
//!
//! let mut game = GameController::new();
//! game.place_mark(4); // X takes the center
//! game.place_mark(0); // O takes the top-left corner
//! assert_eq!(game.status(), GameStatus::InProgress(Mark::X));
//!
//! // Rewind to the start and branch: the old future is discarded.
//! game.jump_to(0);
//! game.place_mark(8);
//! assert_eq!(game.history().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod controller;
mod record;
mod rules;
mod types;

pub mod invariants;

// Crate-level exports - Controller
pub use controller::{GameController, GameStatus, PlaceError};

// Crate-level exports - History records
pub use record::{MoveLabel, MoveRecord};

// Crate-level exports - Rules
pub use rules::{LINES, WinResult, check_winner, is_full};

// Crate-level exports - Domain types
pub use types::{Board, CELLS, Mark, SIDE, Square};
