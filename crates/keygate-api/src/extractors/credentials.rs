//! `Credentials` extractor — accepts the login body as JSON or form data.

use axum::extract::{Form, FromRequest, Json, Request};
use axum::http::header;
use validator::Validate;

use keygate_core::error::AuthError;

use crate::dto::request::LoginRequest;
use crate::error::ApiError;

/// Login credentials parsed from either a JSON or a form-encoded body,
/// chosen by the request's content type.
///
/// Every parse or validation failure maps to `MalformedRequest` (422); bad
/// input never reaches the issuer.
#[derive(Debug, Clone)]
pub struct Credentials(pub LoginRequest);

impl<S> FromRequest<S> for Credentials
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        let login = if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(login) = Form::<LoginRequest>::from_request(req, state)
                .await
                .map_err(|_| malformed())?;
            login
        } else {
            let Json(login) = Json::<LoginRequest>::from_request(req, state)
                .await
                .map_err(|_| malformed())?;
            login
        };

        login.validate().map_err(|_| malformed())?;

        Ok(Credentials(login))
    }
}

fn malformed() -> ApiError {
    ApiError(AuthError::malformed_request("Missing username or password"))
}
