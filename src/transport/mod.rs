//! HTTP Transport
//!
//! The seam between the fetch logic and whatever performs the actual GET.
//! The browser build plugs in a fetch-based transport; native hosts use
//! [`ReqwestTransport`].

#[cfg(not(target_arch = "wasm32"))]
mod http;

#[cfg(not(target_arch = "wasm32"))]
pub use http::ReqwestTransport;

use async_trait::async_trait;

use crate::error::FetchError;

/// Status and body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a GET request.
///
/// Implementations resolve with any response the server sent, whatever its
/// status, and fail with [`FetchError::Network`] only when no response
/// arrived. Futures are not required to be `Send`: browser fetches live on
/// the single-threaded event loop.
#[async_trait(?Send)]
pub trait Transport {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;
}
