//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::{Move, MoveError};
use crate::position::Position;
use crate::rules::check_winner;
use crate::types::{Board, Square};
use strum::IntoEnumIterator;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: nobody has won on the board yet.
pub struct GameUndecided;

impl GameUndecided {
    /// Fails with [`MoveError::GameOver`] once a line is complete.
    #[instrument(skip(board))]
    pub fn check(board: &Board) -> Result<(), MoveError> {
        match check_winner(board) {
            Some(_) => Err(MoveError::GameOver),
            None => Ok(()),
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`] if the target square is taken.
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveError> {
        if !board.is_empty(mov.position) {
            Err(MoveError::SquareOccupied(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: the board is undecided and the square is free.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    ///
    /// The decided-board check runs first, so a move on an occupied square
    /// of a finished game reports [`MoveError::GameOver`].
    #[instrument(skip(board))]
    pub fn check(mov: &Move, board: &Board) -> Result<(), MoveError> {
        GameUndecided::check(board)?;
        SquareIsEmpty::check(mov, board)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions on a single board.
///
/// Preconditions:
/// - No winner yet
/// - Square must be empty
///
/// Postconditions:
/// - Exactly one square changed, from empty to occupied
pub struct MoveContract;

impl Contract<Board, Move> for MoveContract {
    fn pre(board: &Board, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, board)
    }

    fn post(before: &Board, after: &Board) -> Result<(), MoveError> {
        let changed: Vec<Position> = Position::iter()
            .filter(|pos| before.get(*pos) != after.get(*pos))
            .collect();

        match changed.as_slice() {
            [pos] if before.get(*pos) == Square::Empty => Ok(()),
            _ => {
                warn!(changed = changed.len(), "Move postcondition violated");
                Err(MoveError::InvariantViolation(format!(
                    "Postcondition failed: expected one newly placed mark, found {} changed squares",
                    changed.len()
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    #[test]
    fn test_precondition_empty_square() {
        let board = Board::new();
        let action = Move::new(Player::X, Position::Center);
        assert!(MoveContract::pre(&board, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let board = Board::new().with(Position::Center, Square::Occupied(Player::X));
        let action = Move::new(Player::O, Position::Center);
        assert_eq!(
            MoveContract::pre(&board, &action),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_decided_board() {
        let board = [Position::TopLeft, Position::TopCenter, Position::TopRight]
            .into_iter()
            .fold(Board::new(), |b, p| b.with(p, Square::Occupied(Player::X)));
        let action = Move::new(Player::O, Position::Center);
        assert_eq!(MoveContract::pre(&board, &action), Err(MoveError::GameOver));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Board::new();
        let after = before.with(Position::Center, Square::Occupied(Player::X));
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = Board::new();
        let after = before
            .with(Position::Center, Square::Occupied(Player::X))
            .with(Position::TopLeft, Square::Occupied(Player::O));
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_rejects_no_change() {
        let board = Board::new();
        assert!(MoveContract::post(&board, &board).is_err());
    }
}
