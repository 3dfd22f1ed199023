//! Protected and role-gated handlers.
//!
//! Both run the same guard predicate; the admin route just passes a
//! required role.

use axum::Json;
use axum::extract::State;

use keygate_core::types::Role;

use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::BearerToken;
use crate::state::AppState;

/// GET /api/protected — any authenticated principal.
pub async fn protected(
    State(state): State<AppState>,
    bearer: BearerToken,
) -> Result<Json<MessageResponse>, ApiError> {
    let principal = state.guard.authorize(bearer.token(), None).await?;

    Ok(Json(MessageResponse {
        message: format!("Hello, {}!", principal.subject),
    }))
}

/// GET /api/admin — requires the `admin` role exactly.
pub async fn admin(
    State(state): State<AppState>,
    bearer: BearerToken,
) -> Result<Json<MessageResponse>, ApiError> {
    let principal = state
        .guard
        .authorize(bearer.token(), Some(Role::Admin))
        .await?;

    Ok(Json(MessageResponse {
        message: format!("Admin access granted for {}", principal.subject),
    }))
}
