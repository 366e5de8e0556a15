//! HTTP API Client
//!
//! Browser transport for the Ease Journal REST API.

use async_trait::async_trait;
use gloo_net::http::Request;

use ease_journal::{ApiClient, ApiConfig, FetchError, HttpResponse, Transport};

/// Local storage key overriding the configured base URL
pub const API_URL_KEY: &str = "ease_journal_api_url";

/// Get the API base URL from local storage or use the configured one
pub fn get_api_base(config: &ApiConfig) -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty());

    normalize_base(stored.as_deref().unwrap_or(&config.base_url))
}

fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Client for the current page
pub fn api_client(config: &ApiConfig) -> ApiClient<GlooTransport> {
    ApiClient::new(get_api_base(config), GlooTransport)
}

/// `fetch`-backed transport
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(format!("Failed to read body: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}
