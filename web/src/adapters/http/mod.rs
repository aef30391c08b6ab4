//! HTTP adapter
//!
//! reqwest implementation of the portfolio API port.

pub mod client;

pub use client::HttpPortfolioApi;
