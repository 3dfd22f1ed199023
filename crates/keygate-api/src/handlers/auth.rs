//! Auth handlers — login, refresh, logout.

use axum::Json;
use axum::extract::State;

use keygate_auth::session::TOKEN_TYPE_BEARER;
use keygate_core::error::AuthError;

use crate::dto::request::RefreshRequest;
use crate::dto::response::{MessageResponse, RefreshResponse, TokenResponse};
use crate::error::ApiError;
use crate::extractors::{BearerToken, Credentials};
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Credentials(req): Credentials,
) -> Result<Json<TokenResponse>, ApiError> {
    let issued = state.issuer.login(&req.username, &req.password).await?;

    Ok(Json(TokenResponse {
        access_token: issued.tokens.access.token,
        token_type: TOKEN_TYPE_BEARER.to_string(),
        refresh_token: issued.tokens.refresh.token,
    }))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<RefreshResponse>, ApiError> {
    let token = req.refresh_token.ok_or_else(|| {
        AuthError::malformed_request("Missing refresh_token in request body")
    })?;

    let refreshed = state.issuer.refresh(&token).await?;

    Ok(Json(RefreshResponse {
        access_token: refreshed.access_token,
        token_type: TOKEN_TYPE_BEARER.to_string(),
    }))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    bearer: BearerToken,
) -> Result<Json<MessageResponse>, ApiError> {
    let token = bearer
        .token()
        .ok_or_else(|| AuthError::unauthenticated("Missing bearer token"))?;

    state.issuer.logout(token).await?;

    Ok(Json(MessageResponse {
        message: "Logged out successfully".to_string(),
    }))
}

/// POST /api/auth/logout-all
pub async fn logout_all(
    State(state): State<AppState>,
    bearer: BearerToken,
) -> Result<Json<MessageResponse>, ApiError> {
    let token = bearer
        .token()
        .ok_or_else(|| AuthError::unauthenticated("Missing bearer token"))?;

    state.issuer.logout_all(token).await?;

    Ok(Json(MessageResponse {
        message: "Logged out everywhere".to_string(),
    }))
}
