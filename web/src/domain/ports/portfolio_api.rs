//! Portfolio API port trait
//!
//! Defines the read-only interface to the remote portfolio API.

use async_trait::async_trait;

use crate::domain::entities::{Portfolio, ProjectDetail};
use crate::error::PortfolioApiError;

/// Remote source of the portfolio graph
///
/// Implementations keep no state between calls and never retry.
#[async_trait]
pub trait PortfolioApi: Send + Sync {
    /// Fetch the full graph of projects, teams and awards
    async fn fetch_portfolio(&self) -> Result<Portfolio, PortfolioApiError>;

    /// Fetch one project's info and Markdown content by its key
    ///
    /// Fails with [`PortfolioApiError::NotFound`] when the API answers with a
    /// non-success status.
    async fn fetch_project_detail(&self, key: &str) -> Result<ProjectDetail, PortfolioApiError>;
}
