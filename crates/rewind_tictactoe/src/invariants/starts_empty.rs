//! Start invariant: history begins with the empty board.

use super::Invariant;
use crate::{Board, History};

/// Invariant: snapshot 0 is the empty board.
pub struct StartsEmptyInvariant;

impl Invariant<History> for StartsEmptyInvariant {
    fn holds(history: &History) -> bool {
        history.snapshots().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts from the empty board"
    }
}
