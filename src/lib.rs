//! # Link Market
//!
//! A marketplace of websites available for paid link insertion, built with
//! Axum and Askama.
//!
//! ## Architecture
//!
//! The crate keeps a clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Listing entities, filtering, pagination and the cart
//! - **Application Layer** ([`application`]) - Catalog loading and cart persistence
//! - **Infrastructure Layer** ([`infrastructure`]) - Sheet client and cart storage backends
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - Server-rendered marketplace, cart and checkout pages
//!
//! ## Features
//!
//! - One-time listing load from a published spreadsheet
//! - Search, range and selector filters with 50-per-page navigation
//! - Cart persisted to files or Redis, restored on startup
//!
//! ## Quick Start
//!
//! ```bash
//! export SHEET_ID="1xvC3V5g5Bv11UbEHbWBfEgxGL6lN9YrUyuui5eOQqFg"
//! export REDIS_URL="redis://localhost:6379"  # Optional
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CartService, CatalogService};
    pub use crate::domain::entities::{CartItem, Website};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
