//! Application layer services.
//!
//! Services own the mutable state of the process and coordinate domain logic
//! with infrastructure:
//!
//! - [`services::catalog_service::CatalogService`] - One-time listing load and its status
//! - [`services::cart_service::CartService`] - Cart mutations and persistence

pub mod services;
