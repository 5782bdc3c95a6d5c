//! Server-rendered marketplace pages.
//!
//! Uses Askama templates for server-side rendering. Cart actions are plain
//! HTML forms that post and redirect back.
//!
//! # Modules
//!
//! - [`handlers`] - Page rendering and cart form handlers
//! - [`routes`] - Page route configuration
//! - [`view`] - Presentation models for the templates

pub mod handlers;
pub mod routes;
pub mod view;
