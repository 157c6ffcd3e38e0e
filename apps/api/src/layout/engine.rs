//! Zone auto-layout — wires the graph builder, seed selection, placement and
//! the three post-placement analyses into one pure call.
//!
//! `compute_layout` is synchronous and CPU-bound. Callers on the async runtime
//! run it inside `tokio::task::spawn_blocking`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::layout::graph::build_connection_graph;
use crate::layout::one_way::{detect_one_way_exits, OneWayExit};
use crate::layout::overlaps::{detect_overlaps, OverlapGroup};
use crate::layout::placement::{place_rooms, LayoutPosition};
use crate::layout::quality::layout_quality;
use crate::layout::spacing::SpacingMode;
use crate::layout::start::{select_start_room, StartPreferences, StartReason};
use crate::models::zone::Room;

/// Knobs for one layout run. Both historical variants are presets of this.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    pub spacing: SpacingMode,
    pub infer_reverse_edges: bool,
    pub start: StartPreferences,
}

impl LayoutOptions {
    /// Density-based spacing with reverse-edge inference.
    pub fn dynamic() -> Self {
        Self {
            spacing: SpacingMode::Dynamic,
            infer_reverse_edges: true,
            start: StartPreferences::default(),
        }
    }

    /// Constant spacing over declared exits only.
    pub fn fixed(spacing: i32) -> Self {
        Self {
            spacing: SpacingMode::Fixed(spacing),
            infer_reverse_edges: false,
            start: StartPreferences::default(),
        }
    }

    pub fn with_start(mut self, start: StartPreferences) -> Self {
        self.start = start;
        self
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self::dynamic()
    }
}

/// Bookkeeping about how a layout was produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutStats {
    pub room_count: usize,
    pub placed_by_traversal: usize,
    pub overflow_count: usize,
    pub spacing: i32,
    pub max_depth: usize,
    pub traversal_edges: usize,
    pub synthetic_edges: usize,
    pub seed_room_id: Option<i64>,
    pub seed_reason: Option<StartReason>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneLayout {
    pub positions: BTreeMap<i64, LayoutPosition>,
    pub overlaps: Vec<OverlapGroup>,
    pub quality: f64,
    pub one_way_exits: Vec<OneWayExit>,
    pub stats: LayoutStats,
}

/// Lays out one zone. Never fails: an empty room set yields an empty layout.
pub fn compute_layout(
    rooms: &[Room],
    requested_start: Option<i64>,
    options: &LayoutOptions,
) -> ZoneLayout {
    let spacing = options.spacing.resolve(rooms.len());
    let Some(seed) = select_start_room(rooms, requested_start, &options.start) else {
        return ZoneLayout {
            stats: LayoutStats {
                spacing,
                ..LayoutStats::default()
            },
            ..ZoneLayout::default()
        };
    };

    let graph = build_connection_graph(rooms, options.infer_reverse_edges);
    let placement = place_rooms(rooms, &graph, seed.room_id, spacing);

    let overlaps = detect_overlaps(rooms, &placement.positions);
    let quality = layout_quality(rooms, &placement.positions);
    let one_way_exits = detect_one_way_exits(rooms);

    ZoneLayout {
        stats: LayoutStats {
            room_count: placement.positions.len(),
            placed_by_traversal: placement.traversed,
            overflow_count: placement.overflow.len(),
            spacing,
            max_depth: placement.max_depth,
            traversal_edges: graph.edge_count(),
            synthetic_edges: graph.synthetic_edge_count(),
            seed_room_id: Some(seed.room_id),
            seed_reason: Some(seed.reason),
        },
        positions: placement.positions,
        overlaps,
        quality,
        one_way_exits,
    }
}
