//! Legal action enumeration.
//!
//! Answers "what can the side to move do" for each phase: vacant points
//! during placement, adjacent slides during movement, unprotected opponent
//! pieces during removal. Also provides random selection for the self-play
//! harness.

use rand::Rng;

use crate::board::{neighbors, Action, GamePhase, GameState, Player, Point, ALL_POINTS};
use crate::rules::mill::removable_points;

/// Returns true if the piece on `point` has at least one vacant neighbor.
fn can_slide(state: &GameState, point: Point) -> bool {
    neighbors(point).iter().any(|&q| state.is_vacant(q))
}

/// The player's pieces that have at least one vacant neighbor.
pub fn movable_points(state: &GameState, player: Player) -> Vec<Point> {
    state
        .on_board(player)
        .iter()
        .filter(|&p| can_slide(state, p))
        .collect()
}

/// Early-exit variant of [`movable_points`] for the stall check.
pub fn has_movable_piece(state: &GameState, player: Player) -> bool {
    state.on_board(player).iter().any(|p| can_slide(state, p))
}

/// The vacant neighbors a piece on `from` can slide to.
pub fn slide_targets(state: &GameState, from: Point) -> Vec<Point> {
    neighbors(from)
        .iter()
        .copied()
        .filter(|&q| state.is_vacant(q))
        .collect()
}

/// Enumerates every action the current player may legally submit.
///
/// Empty once the game is over. In the removal phase an empty result means
/// every opponent piece is protected; submitting any `Remove` then resolves
/// the round as a declared draw.
pub fn legal_actions(state: &GameState) -> Vec<Action> {
    if state.outcome.is_some() {
        return Vec::new();
    }
    let player = state.current_player;
    match state.phase {
        GamePhase::Placement => ALL_POINTS
            .into_iter()
            .filter(|&p| state.is_vacant(p))
            .map(Action::Place)
            .collect(),
        GamePhase::Movement => {
            let mut actions = Vec::new();
            for from in movable_points(state, player) {
                for to in slide_targets(state, from) {
                    actions.push(Action::Move { from, to });
                }
            }
            actions
        }
        GamePhase::Removal => removable_points(state, player.opponent())
            .into_iter()
            .map(Action::Remove)
            .collect(),
    }
}

/// Picks a uniformly random legal action, if any exist.
pub fn random_action(state: &GameState, rng: &mut impl Rng) -> Option<Action> {
    let actions = legal_actions(state);
    if actions.is_empty() {
        return None;
    }
    Some(actions[rng.gen_range(0..actions.len())])
}
