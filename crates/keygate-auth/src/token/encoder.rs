//! JWT token creation with configurable signing and TTL.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use keygate_core::config::AuthConfig;
use keygate_core::error::AuthError;
use keygate_core::types::Role;

use super::claims::{Claims, TokenType};

/// Creates signed JWT access and refresh tokens (HS256).
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Access token TTL.
    access_ttl: Duration,
    /// Refresh token TTL.
    refresh_ttl: Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish()
    }
}

/// A signed compact token together with its expiry instant.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SignedToken {
    /// The compact `header.claims.signature` string.
    pub token: String,
    /// Absolute expiry instant embedded in the claims.
    pub expires_at: DateTime<Utc>,
}

/// Result of a successful token pair generation.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TokenPair {
    /// Short-lived access token.
    pub access: SignedToken,
    /// Long-lived refresh token.
    pub refresh: SignedToken,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            access_ttl: Duration::minutes(config.access_ttl_minutes as i64),
            refresh_ttl: Duration::days(config.refresh_ttl_days as i64),
        }
    }

    /// Signs a claim set with an absolute expiry of `now + ttl`.
    ///
    /// Pure aside from the wall clock: no state is touched, every call mints
    /// a fresh `jti`.
    pub fn sign(
        &self,
        subject: &str,
        role: Role,
        token_type: TokenType,
        ttl: Duration,
    ) -> Result<SignedToken, AuthError> {
        let now = Utc::now();
        let expires_at = now + ttl;

        let claims = Claims {
            sub: subject.to_string(),
            role,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4(),
            token_type,
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::internal(format!("Failed to encode token: {e}")))?;

        Ok(SignedToken { token, expires_at })
    }

    /// Mints a standalone access token (login and refresh flows).
    pub fn issue_access(&self, subject: &str, role: Role) -> Result<SignedToken, AuthError> {
        self.sign(subject, role, TokenType::Access, self.access_ttl)
    }

    /// Mints a standalone refresh token.
    pub fn issue_refresh(&self, subject: &str, role: Role) -> Result<SignedToken, AuthError> {
        self.sign(subject, role, TokenType::Refresh, self.refresh_ttl)
    }

    /// Mints a new access + refresh token pair for a subject.
    pub fn issue_pair(&self, subject: &str, role: Role) -> Result<TokenPair, AuthError> {
        Ok(TokenPair {
            access: self.issue_access(subject, role)?,
            refresh: self.issue_refresh(subject, role)?,
        })
    }
}
