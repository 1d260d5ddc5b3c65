//! Fixed adjacency graph and mill-line tables for the Dadi board.
//!
//! Both tables are built once by const evaluation and are read-only for the
//! lifetime of the program. Same-ring neighbors are the two points at
//! `index +/- 1 (mod 8)`. Spoke points additionally connect to the same
//! index on the adjacent ring(s); corner points never cross rings.

use super::point::{Point, POINT_COUNT, RING_COUNT, RING_SIZE};

/// The maximum neighbor count of any point (a middle-ring spoke).
pub const MAX_NEIGHBORS: usize = 4;

/// A candidate mill line: three points that capture together when occupied
/// by the same player.
pub type Line = [Point; 3];

/// Every point lies on exactly this many candidate mill lines.
pub const LINES_PER_POINT: usize = 2;

#[derive(Debug, Clone, Copy)]
struct NeighborEntry {
    count: usize,
    points: [Point; MAX_NEIGHBORS],
}

static NEIGHBORS: [NeighborEntry; POINT_COUNT] = build_neighbors();

static LINES_THROUGH: [[Line; LINES_PER_POINT]; POINT_COUNT] = build_lines();

/// Wraps `index + offset` around a ring.
const fn around(index: u8, offset: u8) -> u8 {
    (index + offset) % RING_SIZE as u8
}

const fn build_neighbors() -> [NeighborEntry; POINT_COUNT] {
    let origin = Point::new(0, 0);
    let empty = NeighborEntry {
        count: 0,
        points: [origin; MAX_NEIGHBORS],
    };
    let mut table = [empty; POINT_COUNT];

    let mut id = 0;
    while id < POINT_COUNT {
        let p = Point::from_id(id);
        let ring = p.ring();
        let index = p.index();
        let mut entry = empty;

        // The two same-ring neighbors.
        entry.points[entry.count] = Point::new(ring, around(index, RING_SIZE as u8 - 1));
        entry.count += 1;
        entry.points[entry.count] = Point::new(ring, around(index, 1));
        entry.count += 1;

        // Cross-ring links exist only at spokes, between adjacent rings.
        if p.is_spoke() {
            if ring > 0 {
                entry.points[entry.count] = Point::new(ring - 1, index);
                entry.count += 1;
            }
            if (ring as usize) < RING_COUNT - 1 {
                entry.points[entry.count] = Point::new(ring + 1, index);
                entry.count += 1;
            }
        }

        table[id] = entry;
        id += 1;
    }
    table
}

const fn build_lines() -> [[Line; LINES_PER_POINT]; POINT_COUNT] {
    let origin = Point::new(0, 0);
    let mut table = [[[origin; 3]; LINES_PER_POINT]; POINT_COUNT];

    let mut id = 0;
    while id < POINT_COUNT {
        let p = Point::from_id(id);
        let ring = p.ring();
        let index = p.index();

        if p.is_corner() {
            // The two ring sides meeting at this corner.
            table[id][0] = [
                p,
                Point::new(ring, around(index, 1)),
                Point::new(ring, around(index, 2)),
            ];
            table[id][1] = [
                p,
                Point::new(ring, around(index, RING_SIZE as u8 - 1)),
                Point::new(ring, around(index, RING_SIZE as u8 - 2)),
            ];
        } else {
            // The ring side through this spoke, and the cross-ring spoke line.
            table[id][0] = [
                Point::new(ring, around(index, RING_SIZE as u8 - 1)),
                p,
                Point::new(ring, around(index, 1)),
            ];
            table[id][1] = [
                Point::new(0, index),
                Point::new(1, index),
                Point::new(2, index),
            ];
        }

        id += 1;
    }
    table
}

/// Returns the fixed neighbor set of a point.
pub fn neighbors(p: Point) -> &'static [Point] {
    let entry = &NEIGHBORS[p.id()];
    &entry.points[..entry.count]
}

/// Returns true if `a` and `b` are directly connected on the board.
pub fn is_adjacent(a: Point, b: Point) -> bool {
    neighbors(a).contains(&b)
}

/// Returns the two candidate mill lines through a point.
///
/// For a corner these are the two ring sides meeting at it; for a spoke,
/// its ring side and the line of same-index spokes across all three rings.
pub fn lines_through(p: Point) -> &'static [Line; LINES_PER_POINT] {
    &LINES_THROUGH[p.id()]
}
