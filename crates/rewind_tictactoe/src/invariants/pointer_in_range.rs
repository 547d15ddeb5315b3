//! Pointer invariant: the view pointer names a recorded snapshot.

use super::Invariant;
use crate::History;

/// Invariant: `current_move < len`.
pub struct PointerInRangeInvariant;

impl Invariant<History> for PointerInRangeInvariant {
    fn holds(history: &History) -> bool {
        history.current_move() < history.len()
    }

    fn description() -> &'static str {
        "Current move pointer is within recorded history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Game;

    #[test]
    fn test_holds_through_jumps() {
        let mut game = Game::new();
        game.on_cell_activated(4);
        game.on_cell_activated(0);
        assert!(PointerInRangeInvariant::holds(game.history()));

        game.on_history_entry_selected(1).unwrap();
        assert!(PointerInRangeInvariant::holds(game.history()));

        assert!(game.on_history_entry_selected(5).is_err());
        assert!(PointerInRangeInvariant::holds(game.history()));
    }
}
