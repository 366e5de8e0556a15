//! API Client
//!
//! Issues the single GET behind each list view and turns the response into
//! cards or a [`FetchError`].

use crate::collection::Collection;
use crate::error::{FetchError, FetchResult};
use crate::models::Card;
use crate::transport::Transport;

/// Client for the Ease Journal collection endpoints
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    base_url: String,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    /// Create a client; a trailing slash on the base URL is ignored
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, transport }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    /// Full URL of a collection endpoint
    pub fn url_for(&self, collection: Collection) -> String {
        format!("{}{}", self.base_url, collection.endpoint())
    }

    /// Fetch a collection and project it onto display cards
    pub async fn fetch_cards(&self, collection: Collection) -> FetchResult<Vec<Card>> {
        let result = match self.fetch_body(collection).await {
            Ok(body) => collection.decode_cards(&body),
            Err(e) => Err(e),
        };

        match &result {
            Ok(cards) => tracing::debug!("Loaded {} {}", cards.len(), collection.heading().to_lowercase()),
            Err(e) => tracing::warn!("Failed to load {}: {}", collection.heading().to_lowercase(), e),
        }

        result
    }

    async fn fetch_body(&self, collection: Collection) -> FetchResult<String> {
        let url = self.url_for(collection);
        tracing::debug!("GET {}", url);

        let response = self.transport.get(&url).await?;
        if !response.is_success() {
            return Err(FetchError::Status {
                status: response.status,
            });
        }

        Ok(response.body)
    }
}
