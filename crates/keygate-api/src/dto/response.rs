//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Successful login response: the full bearer credential pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Access token.
    pub access_token: String,
    /// Fixed token-type marker (`"bearer"`).
    pub token_type: String,
    /// Refresh token.
    pub refresh_token: String,
}

/// Successful refresh response: a new access token only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    /// Access token.
    pub access_token: String,
    /// Fixed token-type marker (`"bearer"`).
    pub token_type: String,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Whether the TTL store is reachable.
    pub store: bool,
}
