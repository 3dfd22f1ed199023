//! JWT claims structure used in access and refresh tokens.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use keygate_core::types::Role;

/// JWT claims payload embedded in every token Keygate mints.
///
/// Refresh tokens carry `role` as well, so the refresh flow can mint a new
/// access token without a second directory lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the username.
    pub sub: String,
    /// User role at the time of token issuance.
    pub role: Role,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// JWT ID, unique per minted token; used for log correlation.
    pub jti: Uuid,
    /// Token type: access or refresh.
    pub token_type: TokenType,
}

/// Distinguishes access tokens from refresh tokens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// Short-lived access token for API requests.
    Access,
    /// Long-lived refresh token for obtaining new access tokens.
    Refresh,
}

impl Claims {
    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Returns the remaining TTL in seconds, clamped to 0 once expired.
    pub fn remaining_ttl_seconds(&self) -> u64 {
        let remaining = self.exp - Utc::now().timestamp();
        if remaining > 0 { remaining as u64 } else { 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims_expiring_in(seconds: i64) -> Claims {
        let now = Utc::now().timestamp();
        Claims {
            sub: "user1".to_string(),
            role: Role::User,
            iat: now,
            exp: now + seconds,
            jti: Uuid::new_v4(),
            token_type: TokenType::Access,
        }
    }

    #[test]
    fn test_remaining_ttl_clamps_to_zero() {
        assert_eq!(claims_expiring_in(-120).remaining_ttl_seconds(), 0);
        assert!(claims_expiring_in(600).remaining_ttl_seconds() > 590);
    }

    #[test]
    fn test_is_expired() {
        assert!(claims_expiring_in(-1).is_expired());
        assert!(!claims_expiring_in(60).is_expired());
    }

    #[test]
    fn test_token_type_serde() {
        assert_eq!(
            serde_json::to_string(&TokenType::Refresh).unwrap(),
            "\"refresh\""
        );
    }
}
