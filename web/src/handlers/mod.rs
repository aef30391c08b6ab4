//! HTTP handlers
//!
//! Axum request handlers for the portfolio pages.

pub mod pages;

pub use pages::{index, not_found, project};
