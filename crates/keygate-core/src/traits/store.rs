//! TTL-keyed store trait for pluggable backends.

use std::time::Duration;

use async_trait::async_trait;

use crate::result::AuthResult;

/// Trait for TTL-native key-value backends (Redis or in-memory).
///
/// All values are stored as strings. Entries disappear on their own once the
/// TTL elapses; no explicit cleanup pass exists or is needed. Per-key
/// operations are atomic and a `put` is visible to any later-arriving `get`
/// for the same key.
#[async_trait]
pub trait TtlStore: Send + Sync + std::fmt::Debug + 'static {
    /// Get a value by key. Returns `None` if the key does not exist or has
    /// expired.
    async fn get(&self, key: &str) -> AuthResult<Option<String>>;

    /// Set a value with a TTL, unconditionally overwriting any existing
    /// entry. The TTL must be greater than zero.
    async fn put(&self, key: &str, value: &str, ttl: Duration) -> AuthResult<()>;

    /// Delete a key. Deleting an absent key is not an error.
    async fn delete(&self, key: &str) -> AuthResult<()>;

    /// Check whether a live (non-expired) entry exists for the key.
    async fn exists(&self, key: &str) -> AuthResult<bool>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> AuthResult<bool>;
}
