//! Service status endpoints.
//!
//! - `/` - Service banner
//! - `/livez` - Basic liveness probe (immediate 200, no checks)

use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

/// GET / - Reports that the service is up.
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Category Service is running" }))
}

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately without touching storage or cache.
pub async fn livez() -> StatusCode {
    StatusCode::OK
}
