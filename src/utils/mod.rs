//! Utility functions shared across layers.
//!
//! - [`item_id`] - Cart item identifier generation
//! - [`numeric`] - Lenient number parsing for spreadsheet text
//! - [`return_path`] - Local redirect targets for cart forms

pub mod item_id;
pub mod numeric;
pub mod return_path;
