//! HTML page and form handlers.

mod cart;
mod checkout;
mod marketplace;

pub use cart::{cart_add_handler, cart_buy_handler, cart_page_handler, cart_remove_handler};
pub use checkout::checkout_handler;
pub use marketplace::{index_handler, websites_page_handler};
