//! Redis-backed cart storage.

use super::service::{CartStorage, StorageError, StorageResult};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

/// Redis storage, one string key per storage key.
///
/// Uses `ConnectionManager` for connection reuse and reconnects.
/// Errors propagate to the caller.
pub struct RedisStorage {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisStorage {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Connection`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> StorageResult<Self> {
        info!("Connecting to Redis cart storage");

        let client = Client::open(redis_url).map_err(|e| {
            StorageError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            StorageError::Connection(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StorageError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self {
            client: manager,
            key_prefix: "market:".to_string(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl CartStorage for RedisStorage {
    async fn load(&self, key: &str) -> StorageResult<Option<String>> {
        let full_key = self.build_key(key);
        let mut conn = self.client.clone();

        let value = conn
            .get::<_, Option<String>>(&full_key)
            .await
            .map_err(|e| StorageError::Operation(format!("Redis GET {full_key}: {e}")))?;

        debug!("Storage GET {}: {}", full_key, if value.is_some() { "hit" } else { "miss" });
        Ok(value)
    }

    async fn save(&self, key: &str, value: &str) -> StorageResult<()> {
        let full_key = self.build_key(key);
        let mut conn = self.client.clone();

        conn.set::<_, _, ()>(&full_key, value)
            .await
            .map_err(|e| StorageError::Operation(format!("Redis SET {full_key}: {e}")))?;

        debug!("Storage SET {} ({} bytes)", full_key, value.len());
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
