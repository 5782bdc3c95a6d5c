//! DTOs for the cart endpoints.

use crate::domain::cart::{Cart, CartNotice, NoticeKind};
use crate::domain::entities::{CartItem, LINK_INSERTION};
use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_product_type() -> String {
    LINK_INSERTION.to_string()
}

/// Request to add a website to the cart.
#[derive(Debug, Deserialize, Validate)]
pub struct AddToCartRequest {
    #[validate(length(min = 1, max = 253, message = "Domain must be 1-253 characters"))]
    pub domain: String,

    /// Listed price; zero or negative is refused with 422.
    pub price: f64,

    #[serde(rename = "type", default = "default_product_type")]
    #[validate(length(min = 1, max = 64))]
    pub product_type: String,
}

/// Notice produced by a cart operation.
#[derive(Debug, Serialize)]
pub struct NoticeDto {
    pub kind: NoticeKind,
    pub code: &'static str,
    pub message: String,
}

impl From<&CartNotice> for NoticeDto {
    fn from(notice: &CartNotice) -> Self {
        Self {
            kind: notice.kind(),
            code: notice.code(),
            message: notice.message(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddToCartResponse {
    pub notice: NoticeDto,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct RemoveFromCartResponse {
    pub removed: bool,
    pub count: usize,
}

/// Full cart contents.
#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub count: usize,
    pub total: f64,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().to_vec(),
            count: cart.count(),
            total: cart.total(),
        }
    }
}
