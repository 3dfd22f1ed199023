//! Per-request authorization guard.

use std::sync::Arc;

use tracing::debug;

use keygate_core::error::AuthError;
use keygate_core::result::AuthResult;
use keygate_core::types::{Principal, Role};

use crate::revocation::RevocationList;
use crate::token::decoder::JwtDecoder;

/// Validates the access token on a protected request and yields the
/// authenticated principal or a denial.
///
/// One parameterized predicate serves both "any authenticated user" and
/// "role X only" endpoints. The ladder, in order:
///
/// 1. No token: `Unauthenticated`
/// 2. Token on the revocation list: `Revoked`. The list is checked on the
///    raw string before any decode, so a revoked token is rejected even
///    while its signature and expiry are still valid.
/// 3. Codec verify: `InvalidSignature` or `Expired`
/// 4. Required role present but not an exact match: `Forbidden`
#[derive(Debug, Clone)]
pub struct AccessGuard {
    decoder: Arc<JwtDecoder>,
    revocations: Arc<RevocationList>,
}

impl AccessGuard {
    /// Creates a new guard.
    pub fn new(decoder: Arc<JwtDecoder>, revocations: Arc<RevocationList>) -> Self {
        Self {
            decoder,
            revocations,
        }
    }

    /// Runs the validation ladder for one request.
    ///
    /// A revocation-store failure propagates as an error — the request is
    /// denied, never waved through.
    pub async fn authorize(
        &self,
        token: Option<&str>,
        required_role: Option<Role>,
    ) -> AuthResult<Principal> {
        let token = token.ok_or_else(|| AuthError::unauthenticated("Missing bearer token"))?;

        if self.revocations.contains(token).await? {
            debug!("Rejected revoked access token");
            return Err(AuthError::revoked("Token has been revoked"));
        }

        let claims = self.decoder.decode_access(token)?;

        if let Some(required) = required_role {
            if claims.role != required {
                debug!(subject = %claims.sub, required = %required, actual = %claims.role,
                    "Role check failed");
                return Err(AuthError::forbidden("Insufficient permissions"));
            }
        }

        Ok(Principal::new(claims.sub, claims.role))
    }
}
