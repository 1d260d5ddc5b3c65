//! Game orchestration.
//!
//! `GameController` owns the game state and its history. It receives fully
//! resolved intents from the presentation layer, validates them through
//! the rules, records a snapshot per committed action, and reports the
//! resulting public state. No rendering concern ever reaches this layer:
//! callers supply `Point` values, never screen coordinates.

use serde::{Deserialize, Serialize};

use crate::board::{
    GamePhase, GameState, Outcome, Player, Point, Snapshot, ALL_PLAYERS, POINT_COUNT,
};
use crate::history::HistoryManager;
use crate::rules::{self, ActionError};

/// Read-only projection of the game for rendering collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicState {
    pub occupancy: [Option<Player>; POINT_COUNT],
    pub current_player: Player,
    pub phase: GamePhase,
    pub pieces_remaining: [u8; 2],
    pub on_board_counts: [usize; 2],
    pub outcome: Option<Outcome>,
}

/// Owns the game state; the single entry point for mutations.
///
/// Every committed place/move/remove pushes the replaced snapshot onto the
/// undo stack and clears the redo stack. Undo and redo restore snapshots
/// verbatim, phase included, and never fail; on an empty stack they leave
/// the state untouched.
#[derive(Debug, Default)]
pub struct GameController {
    state: GameState,
    history: HistoryManager,
}

impl GameController {
    pub fn new() -> Self {
        GameController {
            state: GameState::new(),
            history: HistoryManager::new(),
        }
    }

    /// Starts a fresh game, dropping all history.
    pub fn reset(&mut self) {
        self.state = GameState::new();
        self.history.clear();
    }

    /// Replaces the current position, dropping all history. Used by
    /// adapters and tests that set up arbitrary positions.
    pub fn load(&mut self, snapshot: &Snapshot) {
        self.state.restore(snapshot);
        self.history.clear();
    }

    /// The owned state, for read-only inspection.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Number of committed actions undo can step back through.
    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    /// Number of undone actions redo can reapply.
    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    /// The display projection of the current state.
    pub fn public_state(&self) -> PublicState {
        let counts =
            ALL_PLAYERS.map(|p| self.state.on_board_count(p));
        PublicState {
            occupancy: *self.state.occupancy(),
            current_player: self.state.current_player,
            phase: self.state.phase,
            pieces_remaining: self.state.pieces_remaining,
            on_board_counts: counts,
            outcome: self.state.outcome,
        }
    }

    /// Places a hand piece of `player` on `point`.
    pub fn place(&mut self, point: Point, player: Player) -> Result<PublicState, ActionError> {
        let before = self.state.snapshot();
        rules::apply_place(&mut self.state, point, player)?;
        self.history.commit(before);
        Ok(self.public_state())
    }

    /// Slides a piece of `player` from `from` to `to`.
    pub fn move_piece(
        &mut self,
        from: Point,
        to: Point,
        player: Player,
    ) -> Result<PublicState, ActionError> {
        let before = self.state.snapshot();
        rules::apply_move(&mut self.state, from, to, player)?;
        self.history.commit(before);
        Ok(self.public_state())
    }

    /// Captures the opponent piece on `point` after `player` formed a mill.
    pub fn remove(&mut self, point: Point, player: Player) -> Result<PublicState, ActionError> {
        let before = self.state.snapshot();
        rules::apply_remove(&mut self.state, point, player)?;
        self.history.commit(before);
        Ok(self.public_state())
    }

    /// Steps back one committed action. A no-op when there is nothing to
    /// undo; undoing out of a finished game is allowed.
    pub fn undo(&mut self) -> PublicState {
        if let Some(snapshot) = self.history.undo(self.state.snapshot()) {
            self.state.restore(&snapshot);
        }
        self.public_state()
    }

    /// Reapplies the most recently undone action. A no-op when nothing has
    /// been undone since the last commit.
    pub fn redo(&mut self) -> PublicState {
        if let Some(snapshot) = self.history.redo(self.state.snapshot()) {
            self.state.restore(&snapshot);
        }
        self.public_state()
    }
}
