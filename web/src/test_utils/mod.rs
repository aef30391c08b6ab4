//! Test utilities
//!
//! A hand-written in-memory portfolio API and test fixtures for unit testing.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
