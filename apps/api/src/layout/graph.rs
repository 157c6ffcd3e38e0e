//! Connection graph — turns per-room exit lists into the adjacency the placement
//! engine walks.
//!
//! Builders write exits one way far more often than both ways, so in dynamic
//! mode every declared `A -d-> B` without a matching `B -reverse(d)-> A` gets a
//! synthetic return edge. The synthetic edges only steer traversal; quality
//! scoring and one-way detection always read the rooms' declared exits.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::layout::directions::reverse_label;
use crate::models::zone::Room;

/// One traversable edge out of a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub direction: String,
    pub to: i64,
    /// True when the edge was inferred rather than declared.
    pub synthetic: bool,
}

/// Adjacency keyed by room id. Every input room has an entry, possibly empty.
#[derive(Debug, Clone)]
pub struct ConnectionGraph {
    edges: HashMap<i64, Vec<Edge>>,
}

impl ConnectionGraph {
    pub fn neighbors(&self, room_id: i64) -> &[Edge] {
        self.edges.get(&room_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    pub fn synthetic_edge_count(&self) -> usize {
        self.edges
            .values()
            .flat_map(|edges| edges.iter())
            .filter(|e| e.synthetic)
            .count()
    }
}

/// Builds the adjacency for `rooms`.
///
/// Exits without a destination, or whose destination is not among `rooms`,
/// are left out. With `infer_reverse_edges` set, missing return edges are
/// synthesised for every declared edge whose direction has a canonical reverse.
pub fn build_connection_graph(rooms: &[Room], infer_reverse_edges: bool) -> ConnectionGraph {
    let known: HashSet<i64> = rooms.iter().map(|r| r.id).collect();
    let mut edges: HashMap<i64, Vec<Edge>> = HashMap::with_capacity(rooms.len());
    let mut declared: Vec<(i64, &str, i64)> = Vec::new();

    for room in rooms {
        let out = edges.entry(room.id).or_default();
        for exit in &room.exits {
            let Some(to) = exit.to_room_id else {
                continue;
            };
            if !known.contains(&to) {
                debug!(
                    from_room = room.id,
                    to_room = to,
                    direction = %exit.direction,
                    "unresolved exit target, leaving it out of the traversal graph"
                );
                continue;
            }
            out.push(Edge {
                direction: exit.direction.clone(),
                to,
                synthetic: false,
            });
            declared.push((room.id, exit.direction.as_str(), to));
        }
    }

    if infer_reverse_edges {
        for (from, direction, to) in declared {
            let Some(reverse) = reverse_label(direction) else {
                continue;
            };
            let back = edges.entry(to).or_default();
            let has_return = back
                .iter()
                .any(|e| e.to == from && e.direction.eq_ignore_ascii_case(reverse));
            if !has_return {
                back.push(Edge {
                    direction: reverse.to_string(),
                    to: from,
                    synthetic: true,
                });
            }
        }
    }

    ConnectionGraph { edges }
}
