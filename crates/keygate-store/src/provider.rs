//! Store manager that dispatches to the configured provider.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use keygate_core::config::store::StoreConfig;
use keygate_core::error::AuthError;
use keygate_core::result::AuthResult;
use keygate_core::traits::store::TtlStore;

/// Store manager that wraps the configured TTL store provider.
///
/// The provider is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct StoreManager {
    /// The inner store provider.
    inner: Arc<dyn TtlStore>,
}

impl StoreManager {
    /// Create a new store manager from configuration.
    pub async fn new(config: &StoreConfig) -> AuthResult<Self> {
        let inner: Arc<dyn TtlStore> = match config.provider.as_str() {
            #[cfg(feature = "redis-backend")]
            "redis" => {
                info!("Initializing Redis store provider");
                let client = crate::redis::RedisClient::connect(&config.redis).await?;
                Arc::new(crate::redis::RedisTtlStore::new(client))
            }
            #[cfg(feature = "memory")]
            "memory" => {
                info!("Initializing in-memory store provider");
                Arc::new(crate::memory::MemoryTtlStore::new(&config.memory))
            }
            other => {
                return Err(AuthError::configuration(format!(
                    "Unknown store provider: '{other}'. Supported: memory, redis"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// Create a store manager from an existing provider (for testing).
    pub fn from_provider(provider: Arc<dyn TtlStore>) -> Self {
        Self { inner: provider }
    }

    /// Get a reference to the inner provider.
    pub fn provider(&self) -> &dyn TtlStore {
        self.inner.as_ref()
    }
}

#[async_trait]
impl TtlStore for StoreManager {
    async fn get(&self, key: &str) -> AuthResult<Option<String>> {
        self.inner.get(key).await
    }

    async fn put(&self, key: &str, value: &str, ttl: Duration) -> AuthResult<()> {
        self.inner.put(key, value, ttl).await
    }

    async fn delete(&self, key: &str) -> AuthResult<()> {
        self.inner.delete(key).await
    }

    async fn exists(&self, key: &str) -> AuthResult<bool> {
        self.inner.exists(key).await
    }

    async fn health_check(&self) -> AuthResult<bool> {
        self.inner.health_check().await
    }
}
