//! Application state and logic.

use crossterm::event::KeyCode;
use rewind_tictactoe::{Game, Position};
use tracing::{debug, instrument};

use crate::config::TuiConfig;
use crate::input::{Action, Focus, action_for, move_cursor};

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    game: Game,
    cursor: Position,
    focus: Focus,
    selected: usize,
    show_coordinates: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            show_coordinates: *config.show_coordinates(),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted entry in the move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether empty squares show their cell number.
    pub fn show_coordinates(&self) -> bool {
        self.show_coordinates
    }

    /// Whether the main loop should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        let action = action_for(key);
        debug!(?action, focus = ?self.focus, "Key mapped");

        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleFocus => {
                self.focus = self.focus.toggle();
                self.selected = self.game.current_move();
            }
            Action::Navigate(key) => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, key),
                Focus::Moves => self.move_selection(key),
            },
            Action::Confirm => match self.focus {
                Focus::Board => self.activate(self.cursor.to_index()),
                Focus::Moves => self.jump(self.selected),
            },
            Action::Cell(index) => self.activate(index),
            Action::StepBack => {
                if let Some(index) = self.game.current_move().checked_sub(1) {
                    self.jump(index);
                }
            }
            Action::StepForward => self.jump(self.game.current_move() + 1),
            Action::None => {}
        }
    }

    fn activate(&mut self, index: usize) {
        if self.game.on_cell_activated(index) {
            self.selected = self.game.current_move();
        }
    }

    fn jump(&mut self, index: usize) {
        if self.game.on_history_entry_selected(index).is_ok() {
            self.selected = index;
        }
    }

    fn move_selection(&mut self, key: KeyCode) {
        let last = self.game.history().len() - 1;
        self.selected = match key {
            KeyCode::Up => self.selected.saturating_sub(1),
            KeyCode::Down => (self.selected + 1).min(last),
            _ => self.selected,
        };
    }
}
