//! Portfolio API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::domain::entities::{Portfolio, ProjectDetail};
use crate::domain::ports::PortfolioApi;
use crate::error::PortfolioApiError;

/// Implementation of the portfolio API client
pub struct HttpPortfolioApi {
    http: Client,
    base_url: String,
}

impl HttpPortfolioApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, PortfolioApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn project_url(&self, key: &str) -> String {
        format!("{}/project/{}", self.base_url, key)
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, PortfolioApiError> {
        tracing::debug!("GET {}", url);

        self.http.get(url).send().await.map_err(|e| {
            tracing::warn!("Failed to GET {}: {}", url, e);
            PortfolioApiError::Network(e)
        })
    }

    async fn decode<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, PortfolioApiError> {
        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!("Failed to decode portfolio API response: {}", e);
            PortfolioApiError::Decode(e.to_string())
        })
    }
}

#[async_trait]
impl PortfolioApi for HttpPortfolioApi {
    async fn fetch_portfolio(&self) -> Result<Portfolio, PortfolioApiError> {
        let response = self.get(&self.base_url).await?;
        let status = response.status();

        if !status.is_success() {
            tracing::warn!("Portfolio API returned {}", status);
            return Err(PortfolioApiError::Upstream {
                status: status.as_u16(),
            });
        }

        self.decode(response).await
    }

    async fn fetch_project_detail(&self, key: &str) -> Result<ProjectDetail, PortfolioApiError> {
        let response = self.get(&self.project_url(key)).await?;
        let status = response.status();

        if !status.is_success() {
            tracing::debug!("Project {} not found ({})", key, status);
            return Err(PortfolioApiError::NotFound(key.to_string()));
        }

        self.decode(response).await
    }
}
