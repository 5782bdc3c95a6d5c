//! Cart item entity.

use serde::{Deserialize, Serialize};

/// Product type attached to every marketplace purchase.
pub const LINK_INSERTION: &str = "Link Insertion";

/// One selected website in the cart.
///
/// Serialized as `{"id", "domain", "price", "type"}`, the layout of the
/// persisted cart array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub domain: String,
    pub price: f64,
    #[serde(rename = "type")]
    pub product_type: String,
}
