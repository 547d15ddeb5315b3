//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board according to tic-tac-toe rules,
//! kept apart from board storage and history.

pub mod win;

pub use win::{LINES, check_winner, winning_line};
