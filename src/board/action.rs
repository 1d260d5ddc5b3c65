//! Player intents, fully resolved to board points.
//!
//! The rendering/input collaborator maps taps to points before building an
//! `Action`; the core never sees screen coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::point::Point;

/// A single fully-specified action a player can submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Place a hand piece on a vacant point (placement phase).
    Place(Point),
    /// Slide a piece to an adjacent vacant point (movement phase).
    Move { from: Point, to: Point },
    /// Capture an opponent piece after forming a mill (removal phase).
    Remove(Point),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Place(p) => write!(f, "place {}", p),
            Action::Move { from, to } => write!(f, "move {} {}", from, to),
            Action::Remove(p) => write!(f, "remove {}", p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::point::Point;

    #[test]
    fn display_forms() {
        assert_eq!(Action::Place(Point::new(0, 3)).to_string(), "place o3");
        assert_eq!(
            Action::Move {
                from: Point::new(1, 0),
                to: Point::new(1, 1)
            }
            .to_string(),
            "move m0 m1"
        );
        assert_eq!(Action::Remove(Point::new(2, 6)).to_string(), "remove i6");
    }
}
