//! Redis TTL store implementation.

use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;

use keygate_core::error::{AuthError, ErrorKind};
use keygate_core::result::AuthResult;
use keygate_core::traits::store::TtlStore;

use super::client::RedisClient;

/// Redis-backed TTL store provider.
///
/// Expiry is delegated to Redis's native per-key TTL (`SET ... EX`), so
/// stale entries disappear without any cleanup pass.
#[derive(Debug, Clone)]
pub struct RedisTtlStore {
    client: RedisClient,
}

impl RedisTtlStore {
    /// Create a new Redis store provider.
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    /// Map a Redis error to an AuthError.
    fn map_err(e: redis::RedisError) -> AuthError {
        AuthError::with_source(ErrorKind::Store, format!("Redis error: {e}"), e)
    }
}

#[async_trait]
impl TtlStore for RedisTtlStore {
    async fn get(&self, key: &str) -> AuthResult<Option<String>> {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        let result: Option<String> = conn.get(&full_key).await.map_err(Self::map_err)?;
        Ok(result)
    }

    async fn put(&self, key: &str, value: &str, ttl: Duration) -> AuthResult<()> {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        // SET with EX is a single atomic overwrite-with-expiry per key.
        let _: () = conn
            .set_ex(&full_key, value, ttl.as_secs().max(1))
            .await
            .map_err(Self::map_err)?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> AuthResult<()> {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        let _: () = conn.del(&full_key).await.map_err(Self::map_err)?;
        Ok(())
    }

    async fn exists(&self, key: &str) -> AuthResult<bool> {
        let full_key = self.client.prefixed_key(key);
        let mut conn = self.client.conn_mut();
        let result: bool = conn.exists(&full_key).await.map_err(Self::map_err)?;
        Ok(result)
    }

    async fn health_check(&self) -> AuthResult<bool> {
        let mut conn = self.client.conn_mut();
        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(Self::map_err)?;
        Ok(pong == "PONG")
    }
}
