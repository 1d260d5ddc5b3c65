//! Game rules: validated state transitions and the typed errors the
//! mutating commands report.
//!
//! All precondition checks run before any mutation, so a rejected action
//! never leaves the state partially updated.

pub mod apply;
pub mod mill;

use thiserror::Error;

use crate::board::{GamePhase, Player, Point};

pub use apply::{apply_move, apply_place, apply_remove};
pub use mill::{forms_mill, in_mill, removable_points};

/// A rule precondition violated by a place/move/remove action.
///
/// Carried inside [`ActionError::InvalidMove`] to pinpoint which phase,
/// ownership, adjacency, or occupancy check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("the {0} phase does not allow this action")]
    WrongPhase(GamePhase),

    #[error("it is not player {0}'s turn")]
    NotYourTurn(Player),

    #[error("player {0} has no pieces left to place")]
    NoPiecesLeft(Player),

    #[error("{0} is already occupied")]
    Occupied(Point),

    #[error("{0} does not hold one of player {1}'s pieces")]
    NotOwnPiece(Point, Player),

    #[error("{0} is not adjacent to {1}")]
    NotAdjacent(Point, Point),

    #[error("{0} does not hold an opponent piece")]
    NotOpponentPiece(Point),

    #[error("the piece on {0} is inside a mill and protected")]
    Protected(Point),
}

/// Errors reported by the mutating commands. All are non-fatal and leave
/// the game state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action violates a phase, ownership, adjacency, or occupancy
    /// precondition.
    #[error("invalid move: {0}")]
    InvalidMove(#[from] Violation),

    /// The side to move has no piece with a vacant neighbor. Internal to
    /// the transition layer, which converts it into the stall-draw outcome
    /// rather than rejecting the triggering command.
    #[error("player {0} has no legal moves")]
    NoLegalMoves(Player),

    /// A mutating command was issued after a win or draw.
    #[error("the game is already over")]
    GameOver,
}
