//! Subject-keyed registry of the single live refresh token.

use std::sync::Arc;
use std::time::Duration;

use keygate_core::result::AuthResult;
use keygate_core::traits::store::TtlStore;
use keygate_store::{StoreManager, keys};

/// Tracks the one currently-valid refresh token per subject.
///
/// Invariant: at most one live refresh token per subject at any instant. A
/// `put` for a subject unconditionally overwrites whatever was there, which
/// is how a new login invalidates the previous refresh token. Entries expire
/// with the token itself, so the store never accumulates stale rows.
#[derive(Debug, Clone)]
pub struct RefreshTokenStore {
    store: Arc<StoreManager>,
}

impl RefreshTokenStore {
    /// Creates a new refresh token store over the shared TTL store.
    pub fn new(store: Arc<StoreManager>) -> Self {
        Self { store }
    }

    /// Registers `token` as the subject's current refresh token,
    /// overwriting any previous one. `ttl` is the token's remaining
    /// validity.
    pub async fn put(&self, subject: &str, token: &str, ttl: Duration) -> AuthResult<()> {
        self.store
            .put(&keys::refresh_token(subject), token, ttl)
            .await
    }

    /// Returns the subject's current refresh token, if one is live.
    pub async fn get(&self, subject: &str) -> AuthResult<Option<String>> {
        self.store.get(&keys::refresh_token(subject)).await
    }

    /// Drops the subject's refresh token. Used for logout-everywhere and
    /// compromise response.
    pub async fn delete(&self, subject: &str) -> AuthResult<()> {
        self.store.delete(&keys::refresh_token(subject)).await
    }
}
