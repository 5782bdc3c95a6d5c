//! Domain layer: the marketplace pipeline and the cart.
//!
//! Everything here is synchronous and free of I/O except the
//! [`table::TableSource`] seam, which infrastructure implements.
//!
//! # Pipeline
//!
//! 1. [`table::TableSource`] yields a [`table::Table`]
//! 2. [`entities::ingest`] zips rows into [`entities::Website`] records
//! 3. [`filter::filter`] keeps the records matching a [`filter::FilterCriteria`]
//! 4. [`pagination`] slices the result and builds navigation
//! 5. [`marketplace::MarketplaceView`] ties steps 3 and 4 to one request
//!
//! The [`cart::Cart`] holds what the visitor selected.

pub mod cart;
pub mod entities;
pub mod filter;
pub mod marketplace;
pub mod pagination;
pub mod table;
