//! Mill detection and capture protection.
//!
//! A mill ("Dadi") is a line of three same-player pieces: a full ring side,
//! or the three same-index spokes across the rings. A piece inside a mill
//! is protected from capture while its owner still has an unprotected
//! piece elsewhere.

use crate::board::{lines_through, GameState, Player, Point};

/// Returns true if a mill through `point` is fully occupied by `player`.
///
/// Returns false when `point` is vacant or held by the other player; the
/// function is total over valid points.
pub fn forms_mill(state: &GameState, point: Point, player: Player) -> bool {
    if state.player_at(point) != Some(player) {
        return false;
    }
    lines_through(point)
        .iter()
        .any(|line| line.iter().all(|&q| state.player_at(q) == Some(player)))
}

/// Returns true if the piece on `point` sits inside one of its owner's
/// mills. Vacant points are never in a mill.
pub fn in_mill(state: &GameState, point: Point) -> bool {
    match state.player_at(point) {
        Some(owner) => forms_mill(state, point, owner),
        None => false,
    }
}

/// The capture targets among `victim`'s pieces: every piece not currently
/// part of a mill. Empty exactly when all of `victim`'s pieces are
/// protected.
pub fn removable_points(state: &GameState, victim: Player) -> Vec<Point> {
    state
        .on_board(victim)
        .iter()
        .filter(|&p| !in_mill(state, p))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{GameState, Player, Point, ALL_POINTS};

    fn state_with(pieces: &[(u8, u8, Player)]) -> GameState {
        let mut state = GameState::new();
        for &(ring, index, player) in pieces {
            assert!(state.occupy(Point::new(ring, index), player));
        }
        state
    }

    #[test]
    fn ring_side_mill_through_corner() {
        let state = state_with(&[
            (0, 0, Player::A),
            (0, 1, Player::A),
            (0, 2, Player::A),
        ]);
        assert!(forms_mill(&state, Point::new(0, 0), Player::A));
        assert!(forms_mill(&state, Point::new(0, 1), Player::A));
        assert!(forms_mill(&state, Point::new(0, 2), Player::A));
    }

    #[test]
    fn ring_side_mill_wraps_around_index_zero() {
        let state = state_with(&[
            (1, 6, Player::B),
            (1, 7, Player::B),
            (1, 0, Player::B),
        ]);
        assert!(forms_mill(&state, Point::new(1, 7), Player::B));
        assert!(forms_mill(&state, Point::new(1, 0), Player::B));
    }

    #[test]
    fn cross_ring_spoke_mill() {
        let state = state_with(&[
            (0, 3, Player::A),
            (1, 3, Player::A),
            (2, 3, Player::A),
        ]);
        for ring in 0..3 {
            assert!(forms_mill(&state, Point::new(ring, 3), Player::A));
        }
    }

    #[test]
    fn corners_never_mill_across_rings() {
        let state = state_with(&[
            (0, 4, Player::A),
            (1, 4, Player::A),
            (2, 4, Player::A),
        ]);
        // Same index on all rings, but index 4 is a corner: no cross line.
        assert!(!forms_mill(&state, Point::new(0, 4), Player::A));
        assert!(!forms_mill(&state, Point::new(1, 4), Player::A));
    }

    #[test]
    fn mixed_line_is_not_a_mill() {
        let state = state_with(&[
            (0, 0, Player::A),
            (0, 1, Player::B),
            (0, 2, Player::A),
        ]);
        assert!(!forms_mill(&state, Point::new(0, 0), Player::A));
        assert!(!forms_mill(&state, Point::new(0, 1), Player::B));
    }

    #[test]
    fn vacant_or_foreign_point_is_not_a_mill() {
        let state = state_with(&[
            (0, 0, Player::A),
            (0, 1, Player::A),
            (0, 2, Player::A),
        ]);
        assert!(!forms_mill(&state, Point::new(0, 3), Player::A));
        assert!(!forms_mill(&state, Point::new(0, 0), Player::B));
        assert!(!in_mill(&state, Point::new(0, 3)));
    }

    #[test]
    fn detection_is_symmetric_under_color_swap() {
        let pieces = [
            (0, 0, Player::A),
            (0, 1, Player::A),
            (0, 2, Player::A),
            (1, 5, Player::B),
            (0, 5, Player::B),
            (2, 5, Player::B),
            (2, 2, Player::A),
        ];
        let state = state_with(&pieces);
        let swapped: Vec<(u8, u8, Player)> = pieces
            .iter()
            .map(|&(r, i, p)| (r, i, p.opponent()))
            .collect();
        let mirror = state_with(&swapped);

        for p in ALL_POINTS {
            for player in [Player::A, Player::B] {
                assert_eq!(
                    forms_mill(&state, p, player),
                    forms_mill(&mirror, p, player.opponent()),
                    "asymmetric at {} for {}",
                    p,
                    player
                );
            }
        }
    }

    #[test]
    fn removable_excludes_milled_pieces() {
        let state = state_with(&[
            (0, 0, Player::B),
            (0, 1, Player::B),
            (0, 2, Player::B),
            (1, 0, Player::B),
            (2, 4, Player::B),
        ]);
        let removable = removable_points(&state, Player::B);
        assert_eq!(removable, vec![Point::new(1, 0), Point::new(2, 4)]);
    }

    #[test]
    fn removable_is_empty_when_every_piece_is_protected() {
        let state = state_with(&[
            (0, 0, Player::B),
            (0, 1, Player::B),
            (0, 2, Player::B),
        ]);
        assert!(removable_points(&state, Player::B).is_empty());
    }
}
