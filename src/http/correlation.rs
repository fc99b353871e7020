//! Correlation-id generation and propagation.
//!
//! # Responsibilities
//! - Generate a unique correlation id per inbound request (UUID v4)
//! - Bind it into a task-local scope readable from the whole call tree
//! - Carry it on the request and response `x-correlation-id` headers
//! - Open a request span so every log line includes the id
//!
//! # Design Decisions
//! - The binding is strictly request-scoped: the task-local scope ends
//!   with the request future, and concurrent requests never observe each
//!   other's id
//! - A lookup outside any request scope returns a fallback instead of
//!   failing

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

/// Header carrying the correlation id on both request and response.
pub const X_CORRELATION_ID: &str = "x-correlation-id";

/// Value returned by [`correlation_id`] outside any request scope.
const UNKNOWN_CORRELATION: &str = "unknown error";

tokio::task_local! {
    static CORRELATION_ID: String;
}

/// The current request's correlation id, readable from any code executing
/// within the request's call tree. Falls back to `"unknown error"` when no
/// request scope is active.
pub fn correlation_id() -> String {
    CORRELATION_ID
        .try_with(|id| id.clone())
        .unwrap_or_else(|_| UNKNOWN_CORRELATION.to_string())
}

/// Attach a correlation id to every request.
pub async fn correlation_middleware(mut request: Request, next: Next) -> Response {
    let id = Uuid::new_v4().to_string();

    if let Ok(value) = HeaderValue::from_str(&id) {
        request.headers_mut().insert(X_CORRELATION_ID, value);
    }

    let span = tracing::info_span!(
        "request",
        correlation_id = %id,
        method = %request.method(),
        path = %request.uri().path(),
    );

    let mut response = CORRELATION_ID
        .scope(id.clone(), next.run(request))
        .instrument(span)
        .await;

    if let Ok(value) = HeaderValue::from_str(&id) {
        response.headers_mut().insert(X_CORRELATION_ID, value);
    }

    response
}
