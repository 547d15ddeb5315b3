//! Step invariant: each snapshot adds exactly one mark of the right player.

use super::Invariant;
use crate::history::placed_move;
use crate::{History, Player};

/// Invariant: snapshot `i + 1` equals snapshot `i` plus one mark placed by
/// the player due at move `i`.
///
/// Players therefore alternate and no mark is ever removed or overwritten.
pub struct OneMarkPerStepInvariant;

impl Invariant<History> for OneMarkPerStepInvariant {
    fn holds(history: &History) -> bool {
        history
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(i, pair)| {
                placed_move(&pair[0], &pair[1])
                    .is_some_and(|mov| mov.player == Player::for_move(i))
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds one mark for the player due"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Game, Position, Square};

    #[test]
    fn test_legal_game_holds() {
        let mut game = Game::new();
        for index in [4, 0, 8, 2, 1] {
            game.on_cell_activated(index);
        }
        assert!(OneMarkPerStepInvariant::holds(game.history()));
    }

    #[test]
    fn test_overwrite_violates() {
        let x = Board::new().with(Position::Center, Square::Occupied(Player::X));
        let overwritten = x.with(Position::Center, Square::Occupied(Player::O));

        let mut history = History::new();
        history.play(x);
        history.play(overwritten);
        assert!(!OneMarkPerStepInvariant::holds(&history));
    }

    #[test]
    fn test_repeated_snapshot_violates() {
        let mut history = History::new();
        history.play(Board::new());
        assert!(!OneMarkPerStepInvariant::holds(&history));
    }
}
