//! API route configuration.

use crate::api::handlers::{
    add_to_cart_handler, cart_handler, filters_handler, remove_from_cart_handler,
    websites_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};

/// JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET    /websites`   - Filtered, paginated listing
/// - `GET    /filters`    - Category and region options
/// - `GET    /cart`       - Cart contents
/// - `POST   /cart`       - Add a website to the cart
/// - `DELETE /cart/{id}`  - Remove a cart item
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/websites", get(websites_handler))
        .route("/filters", get(filters_handler))
        .route("/cart", get(cart_handler).post(add_to_cart_handler))
        .route("/cart/{id}", delete(remove_from_cart_handler))
}
