//! HTTP error responses.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::infrastructure::dto::ErrorResponseDto;

/// Errors returned by HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// The body could not be extracted as JSON of the expected shape.
    ///
    /// The status code is the one axum picked for the rejection:
    /// 400 for a syntax error, 415 for a missing JSON content type and
    /// 422 for a missing or mistyped field.
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(rejection) => rejection.status(),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::InvalidBody(_) => "invalid_body",
        }
    }

    fn detail(&self) -> String {
        match self {
            ApiError::InvalidBody(rejection) => rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!("Rejecting request with {}: {}", status, self);

        let body = ErrorResponseDto {
            error: self.kind().to_string(),
            message: self.detail(),
        };
        (status, Json(body)).into_response()
    }
}
