pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::layout::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Zone layout API
        .route("/api/v1/zones/layout", post(handlers::handle_zone_layout))
        .with_state(state)
}
