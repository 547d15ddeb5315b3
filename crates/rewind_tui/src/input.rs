//! Keyboard handling: cursor movement and key-to-action mapping.

use crossterm::event::KeyCode;
use rewind_tictactoe::Position;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 board.
    #[default]
    Board,
    /// The move list.
    Moves,
}

impl Focus {
    /// Returns the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        }
    }
}

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the program.
    Quit,
    /// Switch focus between board and move list.
    ToggleFocus,
    /// Move the board cursor or the move list selection.
    Navigate(KeyCode),
    /// Activate whatever is under the cursor or selection.
    Confirm,
    /// Activate a board cell directly (0-8).
    Cell(usize),
    /// Jump one entry back in history.
    StepBack,
    /// Jump one entry forward in history.
    StepForward,
    /// Key has no binding.
    None,
}

/// Maps a key to an action.
pub fn action_for(key: KeyCode) -> Action {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Tab | KeyCode::BackTab => Action::ToggleFocus,
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Action::Navigate(key),
        KeyCode::Enter | KeyCode::Char(' ') => Action::Confirm,
        KeyCode::Char(c @ '1'..='9') => Action::Cell(c as usize - '1' as usize),
        KeyCode::Char('[') => Action::StepBack,
        KeyCode::Char(']') => Action::StepForward,
        _ => Action::None,
    }
}

/// Moves cursor based on arrow keys; stops at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };

    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_cursor_inside_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_move_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::MiddleRight, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_action_for_digits() {
        assert_eq!(action_for(KeyCode::Char('1')), Action::Cell(0));
        assert_eq!(action_for(KeyCode::Char('9')), Action::Cell(8));
        assert_eq!(action_for(KeyCode::Char('0')), Action::None);
    }

    #[test]
    fn test_action_for_controls() {
        assert_eq!(action_for(KeyCode::Esc), Action::Quit);
        assert_eq!(action_for(KeyCode::Tab), Action::ToggleFocus);
        assert_eq!(action_for(KeyCode::Char(' ')), Action::Confirm);
        assert_eq!(action_for(KeyCode::Char('[')), Action::StepBack);
    }
}
