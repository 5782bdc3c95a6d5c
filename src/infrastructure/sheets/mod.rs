//! Remote sheet adapter.
//!
//! - [`GvizSource`] - [`crate::domain::table::TableSource`] over the Google
//!   Visualization query endpoint
//! - [`payload`] - response unwrapping and decoding

mod gviz;
pub mod payload;

pub use gviz::GvizSource;
