//! reqwest Transport
//!
//! Native HTTP transport backed by a shared `reqwest::Client`.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::{HttpResponse, Transport};
use crate::config::ApiConfig;
use crate::error::FetchError;

/// Transport for native hosts
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport, applying the configured timeout if there is one
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| FetchError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Network(format!("Request timeout: {}", e))
            } else if e.is_connect() {
                FetchError::Network(format!("Connection failed: {}", e))
            } else {
                FetchError::Network(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(format!("Failed to read body: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}
