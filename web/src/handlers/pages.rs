//! Page handlers
//!
//! The portfolio page and per-project detail pages.
//! Supports content negotiation: Accept: application/json for the localized
//! view model as JSON, otherwise an HTML page.

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, Uri},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::app::negotiate_language;
use crate::domain::entities::Language;
use crate::error::AppError;
use crate::render::{render_index, render_project};
use crate::AppState;

/// Query parameters shared by all pages
#[derive(Debug, Default, Deserialize)]
pub struct LanguageQuery {
    /// Explicit language choice from the page's language switch
    pub lang: Option<String>,
}

/// Check if the client wants JSON response
fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}

/// The explicit `lang` choice if valid, otherwise the negotiated language
fn page_language(query: &LanguageQuery, headers: &HeaderMap) -> Language {
    query
        .lang
        .as_deref()
        .and_then(|lang| lang.parse().ok())
        .unwrap_or_else(|| {
            negotiate_language(
                headers
                    .get(header::ACCEPT_LANGUAGE)
                    .and_then(|v| v.to_str().ok()),
            )
        })
}

/// GET /
///
/// Returns the localized portfolio.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let language = page_language(&query, &headers);
    let view = state.portfolio_service.portfolio(language).await?;

    if wants_json(&headers) {
        Ok(Json(view).into_response())
    } else {
        Ok(Html(render_index(&view, &state.site)).into_response())
    }
}

/// GET /project/:key
///
/// Returns one project's localized info and rendered content.
pub async fn project(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(query): Query<LanguageQuery>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let language = page_language(&query, &headers);
    let view = state.portfolio_service.project(&key, language).await?;

    if wants_json(&headers) {
        Ok(Json(view).into_response())
    } else {
        Ok(Html(render_project(&view)).into_response())
    }
}

/// Fallback for routes that do not exist
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
