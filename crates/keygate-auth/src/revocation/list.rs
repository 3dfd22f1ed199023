//! Blacklist of revoked access tokens.

use std::sync::Arc;
use std::time::Duration;

use sha2::{Digest, Sha256};
use tracing::debug;

use keygate_core::result::AuthResult;
use keygate_core::traits::store::TtlStore;
use keygate_store::{StoreManager, keys};

/// Marker value stored against a revoked token.
const REVOKED: &str = "revoked";

/// TTL-backed set of revoked access tokens, keyed by token fingerprint.
///
/// Tokens are addressed by the SHA-256 of the raw compact string, which lets
/// the guard consult the list before any decoding and keeps usable
/// credentials out of the store. An entry lives exactly as long as the token
/// it revokes would have; after natural expiry the entry is redundant and
/// the store drops it on its own.
#[derive(Debug, Clone)]
pub struct RevocationList {
    store: Arc<StoreManager>,
}

impl RevocationList {
    /// Creates a new revocation list over the shared TTL store.
    pub fn new(store: Arc<StoreManager>) -> Self {
        Self { store }
    }

    /// Records the token as revoked for `ttl`, which the caller computes as
    /// `exp - now` clamped to zero. A zero TTL is a silent no-op: an
    /// already-expired token needs no revocation entry.
    pub async fn add(&self, token: &str, ttl: Duration) -> AuthResult<()> {
        if ttl.is_zero() {
            debug!("Skipping revocation entry for already-expired token");
            return Ok(());
        }
        self.store
            .put(&keys::blacklist(&fingerprint(token)), REVOKED, ttl)
            .await
    }

    /// O(1) membership check; consulted on every protected request before
    /// any claim is trusted. A store failure propagates, and the caller
    /// denies on error rather than authorizing.
    pub async fn contains(&self, token: &str) -> AuthResult<bool> {
        self.store
            .exists(&keys::blacklist(&fingerprint(token)))
            .await
    }
}

/// SHA-256 hex fingerprint of a raw token string.
fn fingerprint(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    digest.iter().map(|b| format!("{b:02x}")).collect()
}
