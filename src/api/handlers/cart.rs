//! Handlers for the cart endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::cart::{
    AddToCartRequest, AddToCartResponse, CartResponse, RemoveFromCartResponse,
};
use crate::domain::cart::CartNotice;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the cart contents.
///
/// # Endpoint
///
/// `GET /api/cart`
pub async fn cart_handler(State(state): State<AppState>) -> Json<CartResponse> {
    let cart = state.cart.snapshot().await;
    Json(CartResponse::from(&cart))
}

/// Adds a website to the cart.
///
/// # Endpoint
///
/// `POST /api/cart`
///
/// # Request Body
///
/// ```json
/// {"domain": "techblog.com", "price": 120, "type": "Link Insertion"}
/// ```
///
/// # Response
///
/// **201 Created** when the item was inserted, **200 OK** when the domain
/// was already in the cart:
///
/// ```json
/// {"notice": {"kind": "toast", "code": "added", "message": "Added techblog.com to cart!"}, "count": 1}
/// ```
///
/// # Errors
///
/// - 400 Bad Request if validation fails
/// - 422 Unprocessable Entity if the price is not positive
pub async fn add_to_cart_handler(
    State(state): State<AppState>,
    Json(payload): Json<AddToCartRequest>,
) -> Result<(StatusCode, Json<AddToCartResponse>), AppError> {
    payload.validate()?;

    let notice = state
        .cart
        .add(&payload.domain, payload.price, &payload.product_type)
        .await?;

    if notice == CartNotice::InvalidPrice {
        return Err(AppError::unprocessable(
            notice.message(),
            json!({ "domain": payload.domain, "price": payload.price }),
        ));
    }

    let status = if notice.inserted() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((
        status,
        Json(AddToCartResponse {
            notice: (&notice).into(),
            count: state.cart.count().await,
        }),
    ))
}

/// Removes a cart item by id.
///
/// # Endpoint
///
/// `DELETE /api/cart/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no item has this id.
pub async fn remove_from_cart_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RemoveFromCartResponse>, AppError> {
    let removed = state.cart.remove(&id).await?;

    if !removed {
        return Err(AppError::not_found(
            "Cart item not found",
            json!({ "id": id }),
        ));
    }

    Ok(Json(RemoveFromCartResponse {
        removed,
        count: state.cart.count().await,
    }))
}
