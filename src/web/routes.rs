//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    cart_add_handler, cart_buy_handler, cart_page_handler, cart_remove_handler,
    checkout_handler, index_handler, websites_page_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Marketplace, cart and checkout pages.
///
/// # Endpoints
///
/// - `GET  /`                  - Redirect to `/websites`
/// - `GET  /websites`          - Filtered, paginated listing
/// - `POST /cart/add`          - Add a website, back to the listing with a notice
/// - `POST /cart/buy`          - Add a website, on to checkout
/// - `POST /cart/remove/{id}`  - Remove an item, back to the cart
/// - `GET  /cart`              - Cart page
/// - `GET  /checkout`          - Checkout summary
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/websites", get(websites_page_handler))
        .route("/cart", get(cart_page_handler))
        .route("/cart/add", post(cart_add_handler))
        .route("/cart/buy", post(cart_buy_handler))
        .route("/cart/remove/{id}", post(cart_remove_handler))
        .route("/checkout", get(checkout_handler))
}
