//! Placement engine — breadth-first coordinate assignment from a seed room.
//!
//! Each room moves `unvisited → queued → placed`; a room's coordinate is fixed
//! the moment it is first reached, so the first (shortest, then
//! direction-ordered) path wins. Rooms the walk never reaches are packed into
//! an overflow grid to the east of the origin.

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::layout::directions::{offset_for, Direction};
use crate::layout::graph::{ConnectionGraph, Edge};
use crate::models::zone::Room;

/// Overflow grid starts this many spacings east of the origin.
const OVERFLOW_X_SPACINGS: i32 = 5;
/// Minimum number of columns in the overflow grid.
const OVERFLOW_MIN_COLUMNS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayoutPosition {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl LayoutPosition {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub fn distance_to(&self, other: &LayoutPosition) -> f64 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        let dz = f64::from(other.z) - f64::from(self.z);
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Position one step along `direction`, `spacing` cells away horizontally
    /// or one level away vertically. Coordinates saturate at the `i32` bounds.
    fn step(&self, direction: &str, spacing: i32) -> LayoutPosition {
        if let Some(dz) = Direction::parse(direction).and_then(Direction::z_step) {
            return LayoutPosition::new(self.x, self.y, self.z.saturating_add(dz));
        }
        let offset = offset_for(direction);
        LayoutPosition::new(
            self.x.saturating_add(offset.dx.saturating_mul(spacing)),
            self.y.saturating_add(offset.dy.saturating_mul(spacing)),
            self.z,
        )
    }
}

/// Output of a placement run.
#[derive(Debug, Clone, Default)]
pub struct Placement {
    /// Exactly one entry per distinct input room id.
    pub positions: BTreeMap<i64, LayoutPosition>,
    /// Rooms placed by the traversal, seed included.
    pub traversed: usize,
    /// Unreached rooms, in input order, that went to the overflow grid.
    pub overflow: Vec<i64>,
    /// Deepest BFS level reached from the seed.
    pub max_depth: usize,
}

/// Cardinal directions first, then alphabetical (case-insensitive).
fn traversal_order(edges: &[Edge]) -> Vec<&Edge> {
    let mut ordered: Vec<&Edge> = edges.iter().collect();
    ordered.sort_by_cached_key(|e| {
        let cardinal = Direction::parse(&e.direction).is_some_and(Direction::is_cardinal);
        (!cardinal, e.direction.to_lowercase())
    });
    ordered
}

/// Assigns a grid position to every room.
///
/// The seed lands at `(0, 0, z_hint)`. `seed` must be the id of one of `rooms`.
pub fn place_rooms(
    rooms: &[Room],
    graph: &ConnectionGraph,
    seed: i64,
    spacing: i32,
) -> Placement {
    let mut placed: HashMap<i64, LayoutPosition> = HashMap::with_capacity(rooms.len());
    let mut queue: VecDeque<(i64, LayoutPosition, usize)> = VecDeque::new();
    let mut max_depth = 0;

    let seed_z = rooms
        .iter()
        .find(|r| r.id == seed)
        .map(Room::z_hint)
        .unwrap_or(0);
    let origin = LayoutPosition::new(0, 0, seed_z);
    placed.insert(seed, origin);
    queue.push_back((seed, origin, 0));

    while let Some((room_id, pos, depth)) = queue.pop_front() {
        max_depth = max_depth.max(depth);
        for edge in traversal_order(graph.neighbors(room_id)) {
            if placed.contains_key(&edge.to) {
                continue;
            }
            let next = pos.step(&edge.direction, spacing);
            placed.insert(edge.to, next);
            queue.push_back((edge.to, next, depth + 1));
        }
    }

    let traversed = placed.len();
    let unreached: Vec<&Room> = {
        let mut seen = HashSet::new();
        rooms
            .iter()
            .filter(|r| !placed.contains_key(&r.id) && seen.insert(r.id))
            .collect()
    };

    let columns = overflow_columns(unreached.len());
    let mut overflow = Vec::with_capacity(unreached.len());
    for (i, room) in unreached.into_iter().enumerate() {
        let col = i32::try_from(i % columns).unwrap_or(i32::MAX);
        let row = i32::try_from(i / columns).unwrap_or(i32::MAX);
        let pos = LayoutPosition::new(
            spacing
                .saturating_mul(OVERFLOW_X_SPACINGS)
                .saturating_add(col.saturating_mul(spacing)),
            row.saturating_mul(spacing),
            room.z_hint(),
        );
        debug!(
            room_id = room.id,
            x = pos.x,
            y = pos.y,
            "room unreachable from seed, placed in overflow grid"
        );
        placed.insert(room.id, pos);
        overflow.push(room.id);
    }

    Placement {
        positions: placed.into_iter().collect(),
        traversed,
        overflow,
        max_depth,
    }
}

fn overflow_columns(unreached: usize) -> usize {
    let root = (unreached as f64).sqrt().ceil() as usize;
    root.max(OVERFLOW_MIN_COLUMNS)
}
