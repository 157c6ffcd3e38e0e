use serde::{Deserialize, Serialize};

/// A directed, direction-labeled edge out of a room as stored by the editor.
///
/// `to_room_id = None` marks an exit that leads nowhere traversable (an
/// unfinished exit or one owned by another system).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exit {
    pub direction: String,
    #[serde(default)]
    pub to_room_id: Option<i64>,
    /// Destination zone marker. Opaque to the layout engine.
    #[serde(default)]
    pub to_zone_id: Option<i64>,
}

/// A room as fetched by the resolver layer for one zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    /// Carried for the editor; not used by layout scoring.
    #[serde(default)]
    pub description: Option<String>,
    /// Persisted z level, if the room was placed before.
    #[serde(default)]
    pub layout_z: Option<i32>,
    #[serde(default)]
    pub exits: Vec<Exit>,
}

impl Room {
    /// Z level used when the room has no persisted hint.
    pub fn z_hint(&self) -> i32 {
        self.layout_z.unwrap_or(0)
    }

    pub fn name_lower(&self) -> String {
        self.name.as_deref().unwrap_or_default().to_lowercase()
    }
}

/// Which layout algorithm variant to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// Density-based spacing with reverse-edge inference.
    Dynamic,
    /// Constant spacing over declared exits only.
    Fixed,
}

/// Request body for `POST /api/v1/zones/layout`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRequest {
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub start_room_id: Option<i64>,
    /// Overrides the configured default mode for this call.
    #[serde(default)]
    pub mode: Option<LayoutMode>,
    /// Spacing for `fixed` mode. Falls back to the configured value.
    #[serde(default)]
    pub spacing: Option<i32>,
}
