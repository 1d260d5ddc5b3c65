//! Board representation and game-state types.
//!
//! Contains the core data structures for points, the fixed adjacency and
//! mill-line topology, player actions, and the overall game state.

pub mod action;
pub mod point;
pub mod state;
pub mod topology;

pub use action::Action;
pub use point::{Point, PointSet, ALL_POINTS, POINT_COUNT, RING_COUNT, RING_SIZE};
pub use state::{
    GamePhase, GameState, Outcome, Player, Snapshot, ALL_PLAYERS, PIECES_PER_PLAYER,
};
pub use topology::{is_adjacent, lines_through, neighbors, Line, MAX_NEIGHBORS};
