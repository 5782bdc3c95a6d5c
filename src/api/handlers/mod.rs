//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod cart;
pub mod health;
pub mod websites;

pub use cart::{add_to_cart_handler, cart_handler, remove_from_cart_handler};
pub use health::health_handler;
pub use websites::{filters_handler, websites_handler};
