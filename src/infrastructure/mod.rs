//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`sheets`] - Remote listing sheet (Google Visualization endpoint)
//! - [`storage`] - Cart storage backends (file, Redis, memory)

pub mod sheets;
pub mod storage;
