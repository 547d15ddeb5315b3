//! Game session: the interface a front end drives.
//!
//! A [`Game`] owns one [`History`]. Front ends feed it cell activations and
//! history selections, and read back the board, status and move list. Every
//! read is computed from the history on demand; nothing is cached.

use crate::action::{Move, MoveError};
use crate::engine::{Status, apply_move};
use crate::history::{History, HistoryError};
use crate::position::Position;
use crate::rules::winning_line;
use crate::types::{Board, Player};
use tracing::{debug, instrument};

/// Label for a history entry as shown in a move list.
pub fn history_label(index: usize) -> String {
    if index > 0 {
        format!("Go to move #{}", index)
    } else {
        "Go to game start".to_string()
    }
}

/// One tic-tac-toe session with time travel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    history: History,
}

impl Game {
    /// Starts a session at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
        }
    }

    /// Plays the mark due at the current pointer on `position`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the viewed board is decided and
    /// [`MoveError::SquareOccupied`] if the square is taken. The session is
    /// unchanged on error.
    #[instrument(skip(self), fields(current_move = self.history.current_move()))]
    pub fn play(&mut self, position: Position) -> Result<(), MoveError> {
        let action = Move::new(self.to_move(), position);
        let next = apply_move(self.board(), action)?;
        self.history.play(next);

        debug_assert!(
            self.history.verify().is_ok(),
            "History invariants violated after {}",
            action
        );
        Ok(())
    }

    /// Handles a click/keypress on cell `index` (0-8).
    ///
    /// Illegal activations are ignored. Returns whether a move was recorded.
    #[instrument(skip(self))]
    pub fn on_cell_activated(&mut self, index: usize) -> bool {
        let result = Position::from_index(index)
            .ok_or(MoveError::OutOfBounds(index))
            .and_then(|position| self.play(position));

        match result {
            Ok(()) => true,
            Err(e) => {
                debug!(error = %e, "Cell activation ignored");
                false
            }
        }
    }

    /// Handles selection of history entry `index`.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::OutOfRange`] if no such entry exists.
    pub fn on_history_entry_selected(&mut self, index: usize) -> Result<(), HistoryError> {
        self.history.jump_to(index)
    }

    /// The board at the current pointer.
    pub fn board(&self) -> &Board {
        self.history.current()
    }

    /// Status of the viewed board.
    pub fn status(&self) -> Status {
        Status::of(self.board(), self.to_move())
    }

    /// Status line text: `Winner: X` or `Next player: O`.
    pub fn status_text(&self) -> String {
        self.status().to_string()
    }

    /// One label per history entry, oldest first.
    pub fn history_labels(&self) -> Vec<String> {
        (0..self.history.len()).map(history_label).collect()
    }

    /// Index of the viewed history entry.
    pub fn current_move(&self) -> usize {
        self.history.current_move()
    }

    /// Player due to move on the viewed board.
    pub fn to_move(&self) -> Player {
        self.history.to_move()
    }

    /// Winner on the viewed board, if any.
    pub fn winner(&self) -> Option<Player> {
        self.status().winner()
    }

    /// Completed line on the viewed board, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        winning_line(self.board()).map(|(line, _)| line)
    }

    /// The underlying history.
    pub fn history(&self) -> &History {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    #[test]
    fn test_labels() {
        assert_eq!(history_label(0), "Go to game start");
        assert_eq!(history_label(3), "Go to move #3");
    }

    #[test]
    fn test_new_game_projections() {
        let game = Game::new();
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.status_text(), "Next player: X");
        assert_eq!(game.history_labels(), vec!["Go to game start".to_string()]);
        assert_eq!(game.winner(), None);
        assert_eq!(game.winning_line(), None);
    }

    #[test]
    fn test_play_reports_reason() {
        let mut game = Game::new();
        game.play(Position::Center).unwrap();
        assert_eq!(
            game.play(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(game.current_move(), 1);
    }

    #[test]
    fn test_out_of_bounds_cell_ignored() {
        let mut game = Game::new();
        assert!(!game.on_cell_activated(9));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_turn_follows_pointer_after_jump() {
        let mut game = Game::new();
        game.on_cell_activated(0);
        game.on_cell_activated(1);
        game.on_cell_activated(2);
        assert_eq!(game.to_move(), Player::O);

        game.on_history_entry_selected(1).unwrap();
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.status_text(), "Next player: O");

        assert!(game.on_cell_activated(8));
        assert_eq!(game.history().len(), 3);
        assert_eq!(
            game.board().get(Position::BottomRight),
            Square::Occupied(Player::O)
        );
        assert_eq!(game.to_move(), Player::X);
    }
}
