//! Durable storage for the cart.
//!
//! Provides a [`CartStorage`] trait with three implementations:
//! - [`FileStorage`] - Default; one JSON file per key
//! - [`RedisStorage`] - Used when Redis is configured
//! - [`MemoryStorage`] - In-process map for testing

mod file_storage;
mod memory_storage;
mod redis_storage;
mod service;

pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;
pub use redis_storage::RedisStorage;
pub use service::{CartStorage, StorageError, StorageResult};

#[cfg(test)]
pub use service::MockCartStorage;
