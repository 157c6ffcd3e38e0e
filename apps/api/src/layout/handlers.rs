use std::collections::HashSet;

use axum::{extract::State, Json};
use tracing::info;

use crate::errors::AppError;
use crate::layout::engine::{compute_layout, ZoneLayout};
use crate::layout::spacing::MAX_FIXED_SPACING;
use crate::models::zone::{LayoutRequest, Room};
use crate::state::AppState;

/// POST /api/v1/zones/layout
///
/// Computes a fresh layout for the posted rooms. Nothing is persisted; the
/// editor decides whether to save the returned positions.
pub async fn handle_zone_layout(
    State(state): State<AppState>,
    Json(req): Json<LayoutRequest>,
) -> Result<Json<ZoneLayout>, AppError> {
    let config = &state.config;
    if req.rooms.len() > config.max_rooms_per_layout {
        return Err(AppError::UnprocessableEntity(format!(
            "zone has {} rooms, layout is limited to {}",
            req.rooms.len(),
            config.max_rooms_per_layout
        )));
    }
    validate_rooms(&req.rooms)?;
    if let Some(spacing) = req.spacing.filter(|s| !(1..=MAX_FIXED_SPACING).contains(s)) {
        return Err(AppError::Validation(format!(
            "spacing must be between 1 and {MAX_FIXED_SPACING}, got {spacing}"
        )));
    }

    let mode = req.mode.unwrap_or(config.layout_mode);
    let options = config.layout_options(mode, req.spacing);
    let rooms = req.rooms;
    let start = req.start_room_id;

    // CPU-bound traversal; keep it off the async executor.
    let layout = tokio::task::spawn_blocking(move || compute_layout(&rooms, start, &options))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in layout: {e}")))?;

    info!(
        rooms = layout.stats.room_count,
        spacing = layout.stats.spacing,
        overflow = layout.stats.overflow_count,
        overlaps = layout.overlaps.len(),
        one_way = layout.one_way_exits.len(),
        quality = layout.quality,
        "Zone layout computed ({mode:?})"
    );
    Ok(Json(layout))
}

/// Room ids must be unique so every room maps to exactly one position.
fn validate_rooms(rooms: &[Room]) -> Result<(), AppError> {
    let mut seen = HashSet::with_capacity(rooms.len());
    for room in rooms {
        if !seen.insert(room.id) {
            return Err(AppError::Validation(format!(
                "duplicate room id {} in layout request",
                room.id
            )));
        }
    }
    Ok(())
}
