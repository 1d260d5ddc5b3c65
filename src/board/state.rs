//! Game state representation.
//!
//! `GameState` is the single source of truth for a game in progress:
//! occupancy, side to move, phase, hand counts, and outcome. It is owned
//! and mutated exclusively by the controller. The mutators here are
//! low-level and unvalidated; rule checking lives in `crate::rules`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::point::{Point, PointSet, ALL_POINTS, POINT_COUNT};

/// The number of pieces each player holds at the start of a game.
pub const PIECES_PER_PLAYER: u8 = 11;

/// One of the two players.
///
/// Display names belong to the presentation layer; the core only ever sees
/// the two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    A,
    B,
}

/// Both players in index order.
pub const ALL_PLAYERS: [Player; 2] = [Player::A, Player::B];

impl Player {
    /// The other player.
    pub const fn opponent(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Index into per-player arrays.
    pub const fn index(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }

    /// Returns the single-character FEN abbreviation.
    pub const fn fen_char(self) -> char {
        match self {
            Player::A => 'A',
            Player::B => 'B',
        }
    }

    /// Parses a player from its single-character FEN abbreviation.
    pub fn from_fen_char(c: char) -> Option<Player> {
        match c {
            'A' => Some(Player::A),
            'B' => Some(Player::B),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

/// The phase within a game turn.
///
/// `Removal` is a nested sub-phase entered when the current player forms a
/// mill; the turn does not pass on mill formation, so the forming player is
/// always the current player while `Removal` is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    Placement,
    Movement,
    Removal,
}

impl GamePhase {
    /// Returns the single-character FEN abbreviation.
    pub const fn fen_char(self) -> char {
        match self {
            GamePhase::Placement => 'p',
            GamePhase::Movement => 'm',
            GamePhase::Removal => 'r',
        }
    }

    /// Parses a phase from its single-character FEN abbreviation.
    pub fn from_fen_char(c: char) -> Option<GamePhase> {
        match c {
            'p' => Some(GamePhase::Placement),
            'm' => Some(GamePhase::Movement),
            'r' => Some(GamePhase::Removal),
            _ => None,
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GamePhase::Placement => "placement",
            GamePhase::Movement => "movement",
            GamePhase::Removal => "removal",
        };
        write!(f, "{}", name)
    }
}

/// A finished game.
///
/// Draws carry an attributed player: the stalled player's opponent, or the
/// capturing player whose every target was protected. The attribution names
/// the outcome; it does not mean that player won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Player),
    Draw(Player),
}

/// Immutable copy of the committed fields of a game state.
///
/// Snapshots are what the history stacks hold and what external persistence
/// serializes. Piece identity is not preserved: a restore regenerates
/// everything from the occupancy map alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub occupancy: [Option<Player>; POINT_COUNT],
    pub current_player: Player,
    pub phase: GamePhase,
    pub pieces_remaining: [u8; 2],
    pub outcome: Option<Outcome>,
}

/// Complete game state at a point in time.
///
/// Occupancy is the canonical board model; the per-player point sets are a
/// cache kept in sync by [`GameState::occupy`] and [`GameState::vacate`]
/// and regenerated from occupancy on every restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    occupancy: [Option<Player>; POINT_COUNT],
    on_board: [PointSet; 2],
    pub current_player: Player,
    pub phase: GamePhase,
    pub pieces_remaining: [u8; 2],
    pub outcome: Option<Outcome>,
}

impl GameState {
    /// Creates the initial state: empty board, placement phase, player A to
    /// move, eleven pieces in each hand.
    pub fn new() -> Self {
        GameState {
            occupancy: [None; POINT_COUNT],
            on_board: [PointSet::EMPTY; 2],
            current_player: Player::A,
            phase: GamePhase::Placement,
            pieces_remaining: [PIECES_PER_PLAYER; 2],
            outcome: None,
        }
    }

    /// The player occupying `point`, if any.
    pub fn player_at(&self, point: Point) -> Option<Player> {
        self.occupancy[point.id()]
    }

    /// True if no piece stands on `point`.
    pub fn is_vacant(&self, point: Point) -> bool {
        self.occupancy[point.id()].is_none()
    }

    /// The full occupancy map, indexed by point id.
    pub fn occupancy(&self) -> &[Option<Player>; POINT_COUNT] {
        &self.occupancy
    }

    /// Puts a piece of `player` on `point`. Returns false if the point is
    /// already occupied.
    pub fn occupy(&mut self, point: Point, player: Player) -> bool {
        if self.occupancy[point.id()].is_some() {
            return false;
        }
        self.occupancy[point.id()] = Some(player);
        self.on_board[player.index()].insert(point);
        true
    }

    /// Removes the piece on `point`, returning its owner.
    pub fn vacate(&mut self, point: Point) -> Option<Player> {
        let owner = self.occupancy[point.id()].take()?;
        self.on_board[owner.index()].remove(point);
        Some(owner)
    }

    /// The cached set of `player`'s on-board pieces.
    pub fn on_board(&self, player: Player) -> PointSet {
        self.on_board[player.index()]
    }

    /// Number of `player` pieces on the board.
    pub fn on_board_count(&self, player: Player) -> usize {
        self.on_board[player.index()].len()
    }

    /// True once both players have placed every hand piece.
    pub fn placement_done(&self) -> bool {
        self.pieces_remaining == [0, 0]
    }

    /// Copies the committed fields into an immutable snapshot.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            occupancy: self.occupancy,
            current_player: self.current_player,
            phase: self.phase,
            pieces_remaining: self.pieces_remaining,
            outcome: self.outcome,
        }
    }

    /// Restores a snapshot, regenerating the on-board cache from its
    /// occupancy map.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.occupancy = snapshot.occupancy;
        self.current_player = snapshot.current_player;
        self.phase = snapshot.phase;
        self.pieces_remaining = snapshot.pieces_remaining;
        self.outcome = snapshot.outcome;

        self.on_board = [PointSet::EMPTY; 2];
        for p in ALL_POINTS {
            if let Some(owner) = snapshot.occupancy[p.id()] {
                self.on_board[owner.index()].insert(p);
            }
        }
    }

    /// Rebuilds a full state from a snapshot.
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let mut state = GameState::new();
        state.restore(snapshot);
        state
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_fen_roundtrip() {
        for p in ALL_PLAYERS {
            assert_eq!(Player::from_fen_char(p.fen_char()), Some(p));
        }
        assert_eq!(Player::from_fen_char('x'), None);
    }

    #[test]
    fn phase_fen_roundtrip() {
        for ph in [GamePhase::Placement, GamePhase::Movement, GamePhase::Removal] {
            assert_eq!(GamePhase::from_fen_char(ph.fen_char()), Some(ph));
        }
        assert_eq!(GamePhase::from_fen_char('x'), None);
    }

    #[test]
    fn opponent_is_involutive() {
        for p in ALL_PLAYERS {
            assert_eq!(p.opponent().opponent(), p);
        }
    }

    #[test]
    fn new_state_is_empty_placement() {
        let state = GameState::new();
        assert!(state.occupancy().iter().all(|o| o.is_none()));
        assert_eq!(state.current_player, Player::A);
        assert_eq!(state.phase, GamePhase::Placement);
        assert_eq!(state.pieces_remaining, [PIECES_PER_PLAYER; 2]);
        assert_eq!(state.outcome, None);
        assert_eq!(state.on_board_count(Player::A), 0);
        assert_eq!(state.on_board_count(Player::B), 0);
    }

    #[test]
    fn occupy_updates_cache() {
        let mut state = GameState::new();
        let p = Point::new(1, 3);
        assert!(state.occupy(p, Player::A));
        assert_eq!(state.player_at(p), Some(Player::A));
        assert!(state.on_board(Player::A).contains(p));
        assert_eq!(state.on_board_count(Player::A), 1);
        assert_eq!(state.on_board_count(Player::B), 0);
    }

    #[test]
    fn occupy_rejects_occupied_point() {
        let mut state = GameState::new();
        let p = Point::new(0, 0);
        assert!(state.occupy(p, Player::A));
        assert!(!state.occupy(p, Player::B));
        assert_eq!(state.player_at(p), Some(Player::A));
    }

    #[test]
    fn vacate_returns_owner_and_updates_cache() {
        let mut state = GameState::new();
        let p = Point::new(2, 5);
        state.occupy(p, Player::B);
        assert_eq!(state.vacate(p), Some(Player::B));
        assert!(state.is_vacant(p));
        assert!(!state.on_board(Player::B).contains(p));
        assert_eq!(state.vacate(p), None);
    }

    #[test]
    fn snapshot_restore_regenerates_cache() {
        let mut state = GameState::new();
        state.occupy(Point::new(0, 0), Player::A);
        state.occupy(Point::new(1, 1), Player::B);
        state.pieces_remaining = [10, 10];
        state.current_player = Player::B;
        let snap = state.snapshot();

        let mut other = GameState::new();
        other.restore(&snap);
        assert_eq!(other, state);
        assert!(other.on_board(Player::A).contains(Point::new(0, 0)));
        assert!(other.on_board(Player::B).contains(Point::new(1, 1)));
    }

    #[test]
    fn snapshot_is_detached_from_live_state() {
        let mut state = GameState::new();
        state.occupy(Point::new(0, 0), Player::A);
        let snap = state.snapshot();
        state.vacate(Point::new(0, 0));
        assert_eq!(snap.occupancy[Point::new(0, 0).id()], Some(Player::A));
    }

    #[test]
    fn snapshot_serde_roundtrip() {
        let mut state = GameState::new();
        state.occupy(Point::new(0, 2), Player::A);
        state.occupy(Point::new(2, 7), Player::B);
        state.phase = GamePhase::Removal;
        let snap = state.snapshot();

        let json = serde_json::to_string(&snap).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
