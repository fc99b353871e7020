//! Validating JSON extractor.
//!
//! Deserializes the request body and runs the schema constraints before
//! the handler is invoked. On failure the extractor terminates the
//! pipeline itself with a structured `{field, message}` list; the handler
//! never runs on invalid input.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                // Body could not be read at all; not a client-side schema problem.
                JsonRejection::BytesRejection(_) => {
                    AppError::Internal("internal server error".to_string())
                }
                other => AppError::BadRequest(other.body_text()),
            })?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}
