//! Liveness endpoints.

use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

pub async fn ping() -> &'static str {
    "pong"
}

pub async fn health() -> impl IntoResponse {
    Json(json!({ "message": "app is running all good and fine" }))
}
