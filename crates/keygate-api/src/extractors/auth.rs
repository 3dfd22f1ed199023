//! `BearerToken` extractor — pulls the raw token from the Authorization
//! header without judging it.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

/// The raw bearer token from the `Authorization` header, if one was sent.
///
/// This extractor never rejects; deciding what a missing or bad token means
/// is the authorization guard's job, so that the full denial ladder
/// (unauthenticated → revoked → invalid → forbidden) runs in one place.
#[derive(Debug, Clone)]
pub struct BearerToken(Option<String>);

impl BearerToken {
    /// Returns the token, if the header carried one.
    pub fn token(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(String::from);

        Ok(BearerToken(token))
    }
}
