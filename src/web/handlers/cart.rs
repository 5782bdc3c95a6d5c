//! Cart page and cart form handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::LINK_INSERTION;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::numeric::parse_float_prefix;
use crate::utils::return_path::{sanitize_return_path, with_notice};
use crate::web::view::{CartBadge, CartLine, total_label};

/// Fields posted by a row's "Add to cart" and "Buy now" buttons.
#[derive(Debug, Deserialize, Validate)]
pub struct CartForm {
    #[validate(length(min = 1, max = 253, message = "Domain must be 1-253 characters"))]
    pub domain: String,
    /// Raw price text; unreadable values count as 0 and are refused.
    #[serde(default)]
    pub price: String,
    pub product_type: Option<String>,
    pub return_to: Option<String>,
}

impl CartForm {
    fn price(&self) -> f64 {
        parse_float_prefix(&self.price).unwrap_or(0.0)
    }

    fn product_type(&self) -> &str {
        self.product_type
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(LINK_INSERTION)
    }
}

/// Adds a website and returns to the submitting page with a notice.
///
/// # Endpoint
///
/// `POST /cart/add`
///
/// The notice travels as `notice` / `notice_domain` query parameters and the
/// target is re-anchored at `#results`.
pub async fn cart_add_handler(
    State(state): State<AppState>,
    Form(form): Form<CartForm>,
) -> Result<Redirect, AppError> {
    form.validate()?;

    let notice = state
        .cart
        .add(&form.domain, form.price(), form.product_type())
        .await?;

    let mut pairs = vec![("notice", notice.code())];
    if let Some(domain) = notice.domain() {
        pairs.push(("notice_domain", domain));
    }

    let target = with_notice(sanitize_return_path(form.return_to.as_deref()), &pairs);
    Ok(Redirect::to(&target))
}

/// Adds a website and continues to checkout whatever the outcome.
///
/// # Endpoint
///
/// `POST /cart/buy`
pub async fn cart_buy_handler(
    State(state): State<AppState>,
    Form(form): Form<CartForm>,
) -> Result<Redirect, AppError> {
    form.validate()?;

    state
        .cart
        .add(&form.domain, form.price(), form.product_type())
        .await?;

    Ok(Redirect::to("/checkout"))
}

/// Removes a cart item and re-renders the cart.
///
/// # Endpoint
///
/// `POST /cart/remove/{id}`
pub async fn cart_remove_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    state.cart.remove(&id).await?;
    Ok(Redirect::to("/cart"))
}

/// Template for the cart page.
#[derive(Template, WebTemplate)]
#[template(path = "cart.html")]
pub struct CartTemplate {
    pub badge: CartBadge,
    pub lines: Vec<CartLine>,
    pub total: String,
}

/// `GET /cart`
pub async fn cart_page_handler(State(state): State<AppState>) -> CartTemplate {
    let cart = state.cart.snapshot().await;

    CartTemplate {
        badge: CartBadge::new(cart.count()),
        lines: cart.items().iter().map(CartLine::from).collect(),
        total: total_label(cart.total()),
    }
}
