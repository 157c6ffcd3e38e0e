// Zone auto-layout: exit graph -> integer grid coordinates, plus overlap,
// quality and one-way diagnostics. Pure and synchronous; the handler runs it
// inside tokio::task::spawn_blocking.

pub mod directions;
pub mod engine;
pub mod graph;
pub mod handlers;
pub mod one_way;
pub mod overlaps;
pub mod placement;
pub mod quality;
pub mod spacing;
pub mod start;

// Re-export the public API consumed by state, config and handlers.
pub use engine::{compute_layout, LayoutOptions, ZoneLayout};
pub use spacing::SpacingMode;
pub use start::StartPreferences;
