//! Checkout page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::state::AppState;
use crate::web::view::{CartBadge, CartLine, total_label};

/// Template for the checkout page.
///
/// Lists the cart and its total. No payment is taken.
#[derive(Template, WebTemplate)]
#[template(path = "checkout.html")]
pub struct CheckoutTemplate {
    pub badge: CartBadge,
    pub lines: Vec<CartLine>,
    pub total: String,
}

/// `GET /checkout`
pub async fn checkout_handler(State(state): State<AppState>) -> CheckoutTemplate {
    let cart = state.cart.snapshot().await;

    CheckoutTemplate {
        badge: CartBadge::new(cart.count()),
        lines: cart.items().iter().map(CartLine::from).collect(),
        total: total_label(cart.total()),
    }
}
