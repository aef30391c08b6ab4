//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use crate::domain::entities::{Portfolio, ProjectDetail};
use crate::domain::ports::PortfolioApi;
use crate::error::PortfolioApiError;

// ============================================================================
// In-Memory Portfolio API
// ============================================================================

#[derive(Default)]
pub struct InMemoryPortfolioApi {
    portfolio: RwLock<Portfolio>,
    details: RwLock<HashMap<String, ProjectDetail>>,
    failing: bool,
    calls: AtomicUsize,
}

impl InMemoryPortfolioApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve this portfolio from `fetch_portfolio`
    pub fn with_portfolio(self, portfolio: Portfolio) -> Self {
        *self.portfolio.write().unwrap() = portfolio;
        self
    }

    /// Serve this detail from `fetch_project_detail`, keyed by its project key
    pub fn with_project_detail(self, detail: ProjectDetail) -> Self {
        self.details
            .write()
            .unwrap()
            .insert(detail.info.key.clone(), detail);
        self
    }

    /// Make every call fail with a decode error
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// Number of fetches made so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PortfolioApi for InMemoryPortfolioApi {
    async fn fetch_portfolio(&self) -> Result<Portfolio, PortfolioApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.failing {
            return Err(PortfolioApiError::Decode("mock failure".to_string()));
        }

        Ok(self.portfolio.read().unwrap().clone())
    }

    async fn fetch_project_detail(&self, key: &str) -> Result<ProjectDetail, PortfolioApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.failing {
            return Err(PortfolioApiError::Decode("mock failure".to_string()));
        }

        self.details
            .read()
            .unwrap()
            .get(key)
            .cloned()
            .ok_or_else(|| PortfolioApiError::NotFound(key.to_string()))
    }
}
