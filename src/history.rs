//! Undo/redo history over immutable state snapshots.
//!
//! The manager is purely structural: it never validates game rules, and
//! restoring a snapshot always succeeds. Piece identity is not preserved
//! across a restore; the canonical state is occupancy-only.

use crate::board::Snapshot;

/// Two stacks of immutable snapshots.
///
/// `commit` records the state an action replaced; `undo` and `redo`
/// exchange the live snapshot with the top of the matching stack.
#[derive(Debug, Clone, Default)]
pub struct HistoryManager {
    undo: Vec<Snapshot>,
    redo: Vec<Snapshot>,
}

impl HistoryManager {
    pub fn new() -> Self {
        HistoryManager::default()
    }

    /// Records the pre-action snapshot of a committed action and clears the
    /// redo stack.
    pub fn commit(&mut self, snapshot: Snapshot) {
        self.undo.push(snapshot);
        self.redo.clear();
    }

    /// Steps back: pushes `current` onto the redo stack and pops the most
    /// recent undo entry as the new current state. `None` (no-op) when
    /// there is nothing to undo.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let restored = self.undo.pop()?;
        self.redo.push(current);
        Some(restored)
    }

    /// Mirror of [`HistoryManager::undo`].
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let restored = self.redo.pop()?;
        self.undo.push(current);
        Some(restored)
    }

    /// Number of states undo can step back through.
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Number of undone states redo can reapply.
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Drops all history, e.g. when loading a new position.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{GameState, Player, Point};

    fn snapshot_with_piece(ring: u8, index: u8) -> Snapshot {
        let mut state = GameState::new();
        state.occupy(Point::new(ring, index), Player::A);
        state.snapshot()
    }

    #[test]
    fn undo_on_empty_stack_is_a_noop() {
        let mut history = HistoryManager::new();
        assert_eq!(history.undo(GameState::new().snapshot()), None);
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn redo_on_empty_stack_is_a_noop() {
        let mut history = HistoryManager::new();
        assert_eq!(history.redo(GameState::new().snapshot()), None);
        assert_eq!(history.undo_depth(), 0);
    }

    #[test]
    fn undo_returns_most_recent_commit() {
        let mut history = HistoryManager::new();
        let first = snapshot_with_piece(0, 0);
        let second = snapshot_with_piece(1, 1);
        let current = snapshot_with_piece(2, 2);

        history.commit(first.clone());
        history.commit(second.clone());

        assert_eq!(history.undo(current.clone()), Some(second));
        assert_eq!(history.undo(current.clone()), Some(first));
        assert_eq!(history.undo(current), None);
    }

    #[test]
    fn undo_then_redo_restores_the_exchanged_state() {
        let mut history = HistoryManager::new();
        let past = snapshot_with_piece(0, 3);
        let present = snapshot_with_piece(2, 5);

        history.commit(past.clone());
        let restored = history.undo(present.clone()).unwrap();
        assert_eq!(restored, past);

        let reapplied = history.redo(restored).unwrap();
        assert_eq!(reapplied, present);
        assert_eq!(history.undo_depth(), 1);
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn commit_clears_the_redo_stack() {
        let mut history = HistoryManager::new();
        history.commit(snapshot_with_piece(0, 0));
        history.undo(snapshot_with_piece(1, 0));
        assert_eq!(history.redo_depth(), 1);

        history.commit(snapshot_with_piece(2, 0));
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn clear_drops_both_stacks() {
        let mut history = HistoryManager::new();
        history.commit(snapshot_with_piece(0, 0));
        history.commit(snapshot_with_piece(0, 1));
        history.undo(snapshot_with_piece(0, 2));

        history.clear();
        assert_eq!(history.undo_depth(), 0);
        assert_eq!(history.redo_depth(), 0);
    }
}
