//! Cart storage trait and error types.

use async_trait::async_trait;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage connection error: {0}")]
    Connection(String),

    #[error("Storage I/O error: {0}")]
    Io(String),

    #[error("Storage operation error: {0}")]
    Operation(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Durable key/value storage for the serialized cart.
///
/// Values are whole documents: [`save`](Self::save) overwrites the previous
/// value of the key, last write wins.
///
/// # Implementations
///
/// - [`crate::infrastructure::storage::FileStorage`] - One file per key in a directory
/// - [`crate::infrastructure::storage::RedisStorage`] - Redis string keys
/// - [`crate::infrastructure::storage::MemoryStorage`] - Process-local map for tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CartStorage: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` if the key exists
    /// - `Ok(None)` if it was never written
    async fn load(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replaces the value stored under `key`.
    async fn save(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Checks if the backend is reachable.
    ///
    /// Used by the health endpoint.
    async fn health_check(&self) -> bool;

    /// Backend name for logs and health output.
    fn backend(&self) -> &'static str;
}
