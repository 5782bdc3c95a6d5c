//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for serialization; request bodies are checked with
//! validator.

pub mod cart;
pub mod health;
pub mod listing;
