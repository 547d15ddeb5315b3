//! Turn/move engine: validates a move against a board and produces the next board.

use crate::action::{Move, MoveError};
use crate::contracts::{Contract, MoveContract};
use crate::rules::check_winner;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Applies `action` to `board`, returning the resulting board.
///
/// The input board is never modified. A move is rejected when the board
/// already has a winner or the target square is occupied.
///
/// # Errors
///
/// Returns [`MoveError::GameOver`] or [`MoveError::SquareOccupied`] when
/// the preconditions fail.
#[instrument(skip(board), fields(player = %action.player, position = %action.position))]
pub fn apply_move(board: &Board, action: Move) -> Result<Board, MoveError> {
    MoveContract::pre(board, &action)?;

    let next = board.with(action.position, Square::Occupied(action.player));

    #[cfg(debug_assertions)]
    MoveContract::post(board, &next)?;

    debug!("Move applied");
    Ok(next)
}

/// What the status line shows for a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// A player has three in a row.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// No winner; this player moves next.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl Status {
    /// Derives the status of `board` given the player due to move.
    pub fn of(board: &Board, to_move: Player) -> Self {
        match check_winner(board) {
            Some(winner) => Status::Winner(winner),
            None => Status::NextPlayer(to_move),
        }
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Status::Winner(player) => Some(*player),
            Status::NextPlayer(_) => None,
        }
    }
}
