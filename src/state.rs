use crate::application::services::{CartService, CatalogService};
use std::sync::Arc;

/// Shared application state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
    pub cart: Arc<CartService>,
}

impl AppState {
    pub fn new(catalog: Arc<CatalogService>, cart: Arc<CartService>) -> Self {
        Self { catalog, cart }
    }
}
