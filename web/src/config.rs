use std::env;
use std::time::Duration;

const DEFAULT_API_URL: &str = "https://api.isamin.kr";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote portfolio API
    pub api_url: String,
    /// Timeout applied to every request to the portfolio API
    pub api_timeout: Duration,
    pub port: u16,
    /// Canonical public URL of this site (og:url)
    pub site_url: String,
    /// Base URL for profile, cover and thumbnail images
    pub assets_url: String,
    /// Base URL for the outbound project/award pages
    pub notion_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            api_url: env::var("PORTFOLIO_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            api_timeout: Duration::from_secs(
                env::var("PORTFOLIO_API_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            site_url: env::var("SITE_URL")
                .unwrap_or_else(|_| "https://portfolio.isamin.kr".to_string()),
            assets_url: env::var("ASSETS_URL")
                .unwrap_or_else(|_| "https://assets.isamin.kr".to_string()),
            notion_url: env::var("NOTION_URL")
                .unwrap_or_else(|_| "https://notion.isamin.kr".to_string()),
        }
    }

    /// Configuration pointing at a local API, for tests
    #[cfg(test)]
    pub fn for_api(api_url: &str) -> Self {
        Self {
            api_url: api_url.to_string(),
            api_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            port: 0,
            site_url: "https://portfolio.test".to_string(),
            assets_url: "https://assets.test".to_string(),
            notion_url: "https://notion.test".to_string(),
        }
    }
}
