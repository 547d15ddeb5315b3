//! Board history with a movable view pointer.
//!
//! `History` stores every board reached in a session, starting from the
//! empty board, plus the index of the board currently shown. Playing from a
//! past board discards the boards after it, so only one line of play is
//! ever kept.

use crate::action::Move;
use crate::invariants::{HistoryInvariants, InvariantSet, InvariantViolation};
use crate::position::Position;
use crate::types::{Board, Player};
use strum::IntoEnumIterator;
use tracing::{info, instrument, warn};

/// Error returned when navigating outside the recorded history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// The requested entry does not exist.
    #[display("History index {} is out of range (history has {} entries)", index, len)]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Number of entries at the time of the request.
        len: usize,
    },
}

impl std::error::Error for HistoryError {}

/// Ordered sequence of board snapshots and the current view pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    snapshots: Vec<Board>,
    current: usize,
}

impl History {
    /// Creates a history holding only the empty board, viewed at move 0.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            current: 0,
        }
    }

    /// Records `next` as the board following the current one.
    ///
    /// Every snapshot after the current pointer is dropped first, then `next`
    /// is appended and becomes current. No legality check happens here.
    #[instrument(skip(self, next), fields(from = self.current, len = self.snapshots.len()))]
    pub fn play(&mut self, next: Board) {
        let discarded = self.snapshots.len() - (self.current + 1);
        self.snapshots.truncate(self.current + 1);
        self.snapshots.push(next);
        self.current = self.snapshots.len() - 1;
        info!(current = self.current, discarded, "Snapshot recorded");
    }

    /// Moves the view pointer to `index`.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::OutOfRange`] when `index` is not a recorded
    /// entry; the pointer is left where it was.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        if index >= self.snapshots.len() {
            warn!(index, "Jump outside recorded history");
            return Err(HistoryError::OutOfRange {
                index,
                len: self.snapshots.len(),
            });
        }
        self.current = index;
        info!(current = index, "Jumped");
        Ok(())
    }

    /// The board at the view pointer.
    pub fn current(&self) -> &Board {
        &self.snapshots[self.current]
    }

    /// Index of the board being viewed.
    pub fn current_move(&self) -> usize {
        self.current
    }

    /// Number of recorded boards (moves played plus the starting board).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Never true: the starting board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// All recorded boards, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// The player due to move at the view pointer.
    pub fn to_move(&self) -> Player {
        Player::for_move(self.current)
    }

    /// Reconstructs the move that produced each snapshot after the first.
    ///
    /// Entry `i` is the move leading from snapshot `i` to snapshot `i + 1`,
    /// or `None` if the two snapshots do not differ by exactly one mark.
    pub fn moves(&self) -> Vec<Option<Move>> {
        self.snapshots
            .windows(2)
            .map(|pair| placed_move(&pair[0], &pair[1]))
            .collect()
    }

    /// Checks every history invariant.
    ///
    /// # Errors
    ///
    /// Returns the list of violated invariants.
    pub fn verify(&self) -> Result<(), Vec<InvariantViolation>> {
        HistoryInvariants::check_all(self)
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

/// Finds the single mark placed between two consecutive boards.
pub(crate) fn placed_move(before: &Board, after: &Board) -> Option<Move> {
    let mut changed = Position::iter()
        .filter(|pos| before.get(*pos) != after.get(*pos));

    let position = changed.next()?;
    if changed.next().is_some() || !before.is_empty(position) {
        return None;
    }
    after
        .get(position)
        .player()
        .map(|player| Move::new(player, position))
}
