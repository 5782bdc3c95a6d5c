//! Core domain entities.
//!
//! - [`Website`] - A listed site, built from a [`SheetRow`]
//! - [`CartItem`] - A website selected for purchase

pub mod cart_item;
pub mod website;

pub use cart_item::{CartItem, LINK_INSERTION};
pub use website::{SheetRow, Website, ingest};
