//! Health check endpoint.

use axum::Json;
use serde_json::{json, Value};

/// Liveness check. Returns 200 as long as the process is serving.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
