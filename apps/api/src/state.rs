use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Layout runs are stateless; the state only carries configuration that turns
/// a request into `LayoutOptions`.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
