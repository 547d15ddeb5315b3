//! Terminal front end for rewind tic-tac-toe.
//!
//! Translates key presses into cell activations and history selections on a
//! [`rewind_tictactoe::Game`], and draws the board, status and move list.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
pub mod ui;

pub use app::App;
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
pub use input::{Action, Focus, action_for, move_cursor};
