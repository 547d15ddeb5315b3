//! Tic-tac-toe with move history and time travel.
//!
//! # Architecture
//!
//! - **Rules**: pure win detection over a board snapshot
//! - **Engine**: validates a move and produces the next snapshot
//! - **History**: every snapshot reached, plus the one being viewed
//! - **Game**: the session a front end talks to
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{Game, Player};
//!
//! let mut game = Game::new();
//! for cell in [0, 4, 1, 5, 2] {
//!     game.on_cell_activated(cell);
//! }
//! assert_eq!(game.winner(), Some(Player::X));
//! assert_eq!(game.status_text(), "Winner: X");
//!
//! game.on_history_entry_selected(0).unwrap();
//! assert_eq!(game.status_text(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod engine;
mod game;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{Contract, GameUndecided, LegalMove, MoveContract, SquareIsEmpty};
pub use engine::{Status, apply_move};
pub use game::{Game, history_label};
pub use history::{History, HistoryError};
pub use invariants::{HistoryInvariants, Invariant, InvariantSet, InvariantViolation};
pub use position::Position;
pub use rules::{check_winner, winning_line};
pub use types::{Board, Player, Square};
