/// Smallest spacing the engine ever uses.
pub const MIN_SPACING: i32 = 2;
/// Largest fixed spacing accepted from configuration or requests.
pub const MAX_FIXED_SPACING: i32 = 1000;

/// How far apart adjacent rooms are placed on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpacingMode {
    /// Spacing grows with the zone's room count (see [`spacing_for_room_count`]).
    Dynamic,
    /// Constant spacing regardless of zone size.
    Fixed(i32),
}

impl SpacingMode {
    pub fn resolve(self, room_count: usize) -> i32 {
        match self {
            SpacingMode::Dynamic => spacing_for_room_count(room_count),
            SpacingMode::Fixed(s) => s.clamp(1, MAX_FIXED_SPACING),
        }
    }
}

/// Denser zones get wider spacing so edge labels stay readable.
/// Non-decreasing in `room_count`, never below [`MIN_SPACING`].
pub fn spacing_for_room_count(room_count: usize) -> i32 {
    match room_count {
        0..=50 => MIN_SPACING,
        51..=100 => 3,
        _ => 4,
    }
}
