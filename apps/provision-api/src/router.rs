//! Route wiring.

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{health_handler, provision_handler};
use crate::state::AppState;

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/tenants/provision", post(provision_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
