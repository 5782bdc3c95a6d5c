//! Business logic services for the application layer.

pub mod cart_service;
pub mod catalog_service;

pub use cart_service::CartService;
pub use catalog_service::{Catalog, CatalogService, CatalogStatus};
