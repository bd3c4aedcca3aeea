//! HTTP Routes

pub mod chat;
pub mod swagger;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use cavy::DomainError;

use crate::models::ErrorResponse;

/// Uniform failure response: an HTTP status plus an `{ "error": ... }`
/// body. All failures look the same to the caller; none are retried.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let status = match &err {
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::Completion(_) => StatusCode::BAD_GATEWAY,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse { error: self.message })).into_response()
    }
}
