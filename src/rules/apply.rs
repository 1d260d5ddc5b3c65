//! Validated state transitions for place, move, and remove.
//!
//! Phase flow:
//!
//! ```text
//! Placement --place(no mill)--> Placement | Movement (both hands empty)
//! Placement --place(mill)-----> Removal
//! Movement  --move(no mill)---> Movement (or stall draw for the next player)
//! Movement  --move(mill)------> Removal
//! Removal   --remove----------> Placement | Movement (win check in Movement)
//! Removal   --remove, all targets protected--> Draw
//! ```
//!
//! The stall draw and the fully-protected draw both carry an attributed
//! player; see the docs on [`crate::board::Outcome`].

use crate::board::{is_adjacent, GamePhase, GameState, Outcome, Player, Point};
use crate::movegen;

use super::mill::{forms_mill, removable_points};
use super::{ActionError, Violation};

/// Minimum on-board pieces; dropping below this in the movement regime
/// loses the game.
const MIN_PIECES: usize = 3;

fn ensure_ongoing(state: &GameState) -> Result<(), ActionError> {
    if state.outcome.is_some() {
        return Err(ActionError::GameOver);
    }
    Ok(())
}

fn ensure_turn(state: &GameState, player: Player) -> Result<(), ActionError> {
    if player != state.current_player {
        return Err(Violation::NotYourTurn(player).into());
    }
    Ok(())
}

/// Checks that the side to move has at least one piece with a vacant
/// neighbor.
fn ensure_side_can_move(state: &GameState) -> Result<(), ActionError> {
    let player = state.current_player;
    if movegen::has_movable_piece(state, player) {
        Ok(())
    } else {
        Err(ActionError::NoLegalMoves(player))
    }
}

/// Recomputes the phase from the hand counts and passes the turn.
///
/// Passing the turn into the movement phase runs the stall check on the
/// receiving player: a player left without a movable piece ends the game
/// in a draw attributed to the opponent, on the turn it would become their
/// move.
fn finish_turn(state: &mut GameState) {
    state.phase = if state.placement_done() {
        GamePhase::Movement
    } else {
        GamePhase::Placement
    };
    state.current_player = state.current_player.opponent();

    if state.phase == GamePhase::Movement {
        if let Err(ActionError::NoLegalMoves(stalled)) = ensure_side_can_move(state) {
            state.outcome = Some(Outcome::Draw(stalled.opponent()));
        }
    }
}

/// Places a hand piece of `player` on `point`.
///
/// Forming a mill enters the removal sub-phase without passing the turn.
pub fn apply_place(
    state: &mut GameState,
    point: Point,
    player: Player,
) -> Result<(), ActionError> {
    ensure_ongoing(state)?;
    if state.phase != GamePhase::Placement {
        return Err(Violation::WrongPhase(state.phase).into());
    }
    ensure_turn(state, player)?;
    if state.pieces_remaining[player.index()] == 0 {
        return Err(Violation::NoPiecesLeft(player).into());
    }
    if !state.is_vacant(point) {
        return Err(Violation::Occupied(point).into());
    }

    state.occupy(point, player);
    state.pieces_remaining[player.index()] -= 1;

    if forms_mill(state, point, player) {
        state.phase = GamePhase::Removal;
    } else {
        finish_turn(state);
    }
    Ok(())
}

/// Slides a piece of `player` from `from` to the adjacent vacant `to`.
pub fn apply_move(
    state: &mut GameState,
    from: Point,
    to: Point,
    player: Player,
) -> Result<(), ActionError> {
    ensure_ongoing(state)?;
    if state.phase != GamePhase::Movement {
        return Err(Violation::WrongPhase(state.phase).into());
    }
    ensure_turn(state, player)?;
    if state.player_at(from) != Some(player) {
        return Err(Violation::NotOwnPiece(from, player).into());
    }
    if !is_adjacent(from, to) {
        return Err(Violation::NotAdjacent(from, to).into());
    }
    if !state.is_vacant(to) {
        return Err(Violation::Occupied(to).into());
    }

    state.vacate(from);
    state.occupy(to, player);

    if forms_mill(state, to, player) {
        state.phase = GamePhase::Removal;
    } else {
        finish_turn(state);
    }
    Ok(())
}

/// Captures the opponent piece on `point` after `player` formed a mill.
///
/// When every opponent piece is protected the round resolves as a draw
/// attributed to the forming player, regardless of the targeted point. A
/// capture that drops the opponent below three pieces wins the game, but
/// only when the recomputed phase is the movement regime; during the
/// placement count-down the same drop passes without a win check.
pub fn apply_remove(
    state: &mut GameState,
    point: Point,
    player: Player,
) -> Result<(), ActionError> {
    ensure_ongoing(state)?;
    if state.phase != GamePhase::Removal {
        return Err(Violation::WrongPhase(state.phase).into());
    }
    ensure_turn(state, player)?;

    let victim = player.opponent();
    let removable = removable_points(state, victim);
    if removable.is_empty() {
        state.outcome = Some(Outcome::Draw(player));
        return Ok(());
    }

    match state.player_at(point) {
        Some(owner) if owner == victim => {
            if !removable.contains(&point) {
                return Err(Violation::Protected(point).into());
            }
        }
        _ => return Err(Violation::NotOpponentPiece(point).into()),
    }

    state.vacate(point);

    let regime = if state.placement_done() {
        GamePhase::Movement
    } else {
        GamePhase::Placement
    };
    if regime == GamePhase::Movement && state.on_board_count(victim) < MIN_PIECES {
        state.phase = regime;
        state.outcome = Some(Outcome::Win(player));
        return Ok(());
    }

    finish_turn(state);
    Ok(())
}
