//! Unified error types for the portfolio web service
//!
//! This module defines error types for each layer:
//! - `PortfolioApiError`: Remote portfolio API client errors
//! - `AppError`: Request boundary errors (rendered as HTML error pages)

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::render::{render_error, ErrorPage};

/// Portfolio API client errors
#[derive(Debug, Error)]
pub enum PortfolioApiError {
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Deserialization error: {0}")]
    Decode(String),

    #[error("Project not found: {0}")]
    NotFound(String),

    #[error("Portfolio API returned status {status}")]
    Upstream { status: u16 },
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Portfolio API error: {0}")]
    Api(#[from] PortfolioApiError),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    fn status_and_page(&self) -> (StatusCode, ErrorPage) {
        match self {
            AppError::Api(PortfolioApiError::NotFound(_)) | AppError::NotFound(_) => {
                (StatusCode::NOT_FOUND, ErrorPage::NotFound)
            }
            AppError::Api(e) => {
                tracing::error!("Portfolio API error: {}", e);
                (StatusCode::BAD_GATEWAY, ErrorPage::Failure)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, page) = self.status_and_page();

        (
            status,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            render_error(page),
        )
            .into_response()
    }
}
