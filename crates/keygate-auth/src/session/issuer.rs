//! Session issuer — orchestrates credential validation and token minting.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use keygate_core::error::{AuthError, ErrorKind};
use keygate_core::result::AuthResult;
use keygate_core::traits::directory::UserDirectory;

use crate::password::PasswordHasher;
use crate::refresh::RefreshTokenStore;
use crate::revocation::RevocationList;
use crate::token::claims::{Claims, TokenType};
use crate::token::decoder::JwtDecoder;
use crate::token::encoder::{JwtEncoder, TokenPair};

/// Fixed token-type marker returned with every issued credential.
pub const TOKEN_TYPE_BEARER: &str = "bearer";

/// Result of a successful login: the freshly minted token pair.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IssuedTokens {
    /// The minted access + refresh pair.
    pub tokens: TokenPair,
}

/// Result of a successful refresh: a new access token only — the refresh
/// token is never rotated in this flow.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RefreshedAccess {
    /// The newly minted access token.
    pub access_token: String,
}

/// Orchestrates the login, refresh, and logout flows.
#[derive(Debug, Clone)]
pub struct SessionIssuer {
    /// External credential-store collaborator.
    directory: Arc<dyn UserDirectory>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// JWT encoder for token minting.
    encoder: Arc<JwtEncoder>,
    /// JWT decoder for refresh/logout validation.
    decoder: Arc<JwtDecoder>,
    /// Per-subject refresh token registry.
    refresh_tokens: Arc<RefreshTokenStore>,
    /// Revoked access token blacklist.
    revocations: Arc<RevocationList>,
}

impl SessionIssuer {
    /// Creates a new session issuer with all required collaborators.
    pub fn new(
        directory: Arc<dyn UserDirectory>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
        refresh_tokens: Arc<RefreshTokenStore>,
        revocations: Arc<RevocationList>,
    ) -> Self {
        Self {
            directory,
            hasher,
            encoder,
            decoder,
            refresh_tokens,
            revocations,
        }
    }

    /// Performs the login flow:
    ///
    /// 1. Directory lookup
    /// 2. Password verification
    /// 3. Mint access + refresh pair from the stored role
    /// 4. Register the refresh token under the subject
    ///
    /// Unknown user and wrong password collapse into one
    /// `InvalidCredentials` so the response never confirms that a username
    /// exists.
    pub async fn login(&self, username: &str, password: &str) -> AuthResult<IssuedTokens> {
        let user = self
            .directory
            .find(username)
            .await?
            .ok_or_else(|| AuthError::invalid_credentials("Incorrect username or password"))?;

        if !self.hasher.verify(password, &user.password_hash) {
            warn!(subject = %username, "Login rejected");
            return Err(AuthError::invalid_credentials(
                "Incorrect username or password",
            ));
        }

        let tokens = self.encoder.issue_pair(&user.username, user.role)?;

        // TTL equals the refresh token's remaining lifetime, so the store
        // entry and the token expire together.
        let refresh_ttl = remaining_ttl(tokens.refresh.expires_at.timestamp());
        self.refresh_tokens
            .put(&user.username, &tokens.refresh.token, refresh_ttl)
            .await?;

        info!(subject = %user.username, role = %user.role, "Login successful");
        Ok(IssuedTokens { tokens })
    }

    /// Performs the refresh flow:
    ///
    /// 1. Codec verify — any signature/expiry/type failure surfaces as
    ///    `InvalidRefreshToken`
    /// 2. The presented token must exactly equal the one stored for the
    ///    subject, which rejects tokens superseded by a newer login
    /// 3. Mint a new access token with the same subject + role
    ///
    /// The refresh token itself is never rotated here; it stays valid until
    /// its own expiry or until a new login overwrites it.
    pub async fn refresh(&self, refresh_token: &str) -> AuthResult<RefreshedAccess> {
        let claims = self
            .decoder
            .decode_refresh(refresh_token)
            .map_err(invalid_refresh)?;

        let current = self.refresh_tokens.get(&claims.sub).await?;
        if current.as_deref() != Some(refresh_token) {
            warn!(subject = %claims.sub, "Refresh rejected: token superseded or unknown");
            return Err(AuthError::invalid_refresh_token("Invalid refresh token"));
        }

        let access = self.encoder.issue_access(&claims.sub, claims.role)?;

        info!(subject = %claims.sub, "Access token refreshed");
        Ok(RefreshedAccess {
            access_token: access.token,
        })
    }

    /// Performs the logout flow: signature-checked decode (expiry
    /// tolerated), then a revocation entry for the token's remaining
    /// lifetime. Logging out an already-expired token succeeds as a no-op,
    /// which also makes repeated logout of the same token safe.
    pub async fn logout(&self, access_token: &str) -> AuthResult<()> {
        let claims = self.revoke(access_token).await?;
        info!(subject = %claims.sub, jti = %claims.jti, "Access token revoked");
        Ok(())
    }

    /// Logout-everywhere: revokes the presented access token and drops the
    /// subject's refresh token, so no new access tokens can be minted
    /// without a fresh login.
    pub async fn logout_all(&self, access_token: &str) -> AuthResult<()> {
        let claims = self.revoke(access_token).await?;
        self.refresh_tokens.delete(&claims.sub).await?;
        info!(subject = %claims.sub, "All credentials revoked for subject");
        Ok(())
    }

    async fn revoke(&self, access_token: &str) -> AuthResult<Claims> {
        let claims = self
            .decoder
            .decode_ignoring_expiry(access_token)
            .map_err(|e| match e.kind {
                ErrorKind::InvalidSignature => {
                    AuthError::malformed_token("Cannot log out a malformed token")
                }
                _ => e,
            })?;

        if claims.token_type != TokenType::Access {
            return Err(AuthError::malformed_token(
                "Cannot log out a non-access token",
            ));
        }

        let ttl = remaining_ttl(claims.exp);
        self.revocations.add(access_token, ttl).await?;
        Ok(claims)
    }
}

/// Remaining lifetime until `exp` (unix seconds), clamped to zero.
fn remaining_ttl(exp: i64) -> Duration {
    let remaining = exp - chrono::Utc::now().timestamp();
    Duration::from_secs(remaining.max(0) as u64)
}

/// Maps any codec failure on a refresh token into the single
/// `InvalidRefreshToken` the caller is allowed to see; the original kind is
/// kept as context in the log only.
fn invalid_refresh(err: AuthError) -> AuthError {
    warn!(reason = %err, "Refresh token rejected");
    AuthError::invalid_refresh_token("Invalid refresh token")
}
