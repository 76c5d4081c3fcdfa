//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board snapshot. Rules are separated
//! from board storage so the controller, the invariants, and tests can
//! all evaluate positions the same way.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, WinResult, check_winner};
