//! Maps domain `AuthError` to HTTP responses.

use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use keygate_core::error::{AuthError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Thin wrapper so the HTTP mapping lives in this crate.
///
/// Handlers return `Result<_, ApiError>`; the `From` impl lets `?` lift any
/// `AuthError` from the auth layer.
#[derive(Debug)]
pub struct ApiError(pub AuthError);

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = match err.kind {
            // Authentication-class failures are all 401, indistinguishable
            // beyond the error code.
            ErrorKind::InvalidCredentials
            | ErrorKind::InvalidSignature
            | ErrorKind::Expired
            | ErrorKind::InvalidRefreshToken
            | ErrorKind::Revoked
            | ErrorKind::Unauthenticated => StatusCode::UNAUTHORIZED,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::MalformedRequest => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::MalformedToken => StatusCode::BAD_REQUEST,
            // Store outages deny the request; fail-closed, never fail-open.
            ErrorKind::Store => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::Configuration | ErrorKind::Internal => {
                tracing::error!(error = %err.message, "Internal server error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ApiErrorResponse {
            error: err.kind.to_string(),
            message: err.message,
        };

        let mut response = (status, Json(body)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                header::HeaderValue::from_static("Bearer"),
            );
        }
        response
    }
}
