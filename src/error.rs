//! Application error taxonomy.
//!
//! # Responsibilities
//! - Carry an HTTP status code alongside each error kind
//! - Convert validation failures into a structured field list
//! - Serve as the single place a response is derived from an error
//!
//! # Design Decisions
//! - Repository and service layers never recover errors; they normalize
//!   persistence failures to `BadRequest` and let everything escape
//! - Handlers perform no error handling; `?` carries errors to the
//!   IntoResponse conversion below
//! - One `NotFound` kind is used uniformly for absent rows

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::http::correlation::correlation_id;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Application error with an associated HTTP status code.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request cannot be satisfied: a persistence failure or a
    /// violated precondition.
    #[error("{0}")]
    BadRequest(String),

    /// The addressed row does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Schema validation rejected the request body.
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    /// Unexpected failure.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| FieldError {
                    field: field.to_string(),
                    message: err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{field} is invalid")),
                })
            })
            .collect();
        // field_errors() iterates a HashMap; sort for a stable response body
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        AppError::Validation(fields)
    }
}

/// Terminal error handler: every unhandled `AppError` becomes a JSON
/// response here, logged with the correlation id attached.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        tracing::error!(
            correlation_id = %correlation_id(),
            status = status.as_u16(),
            error = %self,
            "request failed"
        );

        let body = match &self {
            AppError::Validation(errors) => json!({
                "success": false,
                "errors": errors,
            }),
            other => json!({
                "success": false,
                "message": other.to_string(),
            }),
        };

        (status, Json(body)).into_response()
    }
}
