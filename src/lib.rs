//! # Ease Journal
//!
//! Client core for the Ease Journal web app: three list views (categories,
//! users, journals) backed by GET requests to the Ease Journal REST API.
//!
//! ## Modules
//!
//! - [`models`]: Wire records and the `Data` envelope
//! - [`collection`]: Endpoints and envelope-to-list decoding
//! - [`transport`]: HTTP transport seam
//! - [`client`]: Collection fetches with an explicit error taxonomy
//! - [`view`]: Per-mount list state and unmount guards
//! - [`navigation`]: Route table and navbar entries
//! - [`config`]: TOML configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ease_journal::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let client = ApiClient::new(&config.api.base_url, ReqwestTransport::new(&config.api)?);
//!
//!     let guard = MountGuard::new();
//!     if let Some(state) = load_list(&client, Collection::Journals, &guard.liveness()).await {
//!         match &state.error {
//!             Some(message) => println!("{}", message),
//!             None => {
//!                 for card in state.visible_cards() {
//!                     println!("{} ({})", card.heading, card.detail_line());
//!                 }
//!             }
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod collection;
pub mod config;
pub mod error;
pub mod models;
pub mod navigation;
pub mod transport;
pub mod view;

pub use client::ApiClient;
pub use collection::{decode_records, Collection};
pub use config::{ApiConfig, Config, ConfigError, LoggingConfig};
pub use error::{FetchError, FetchResult, GENERIC_MESSAGE};
pub use models::{Card, Category, Envelope, Journal, Record, User};
pub use navigation::{nav_links, NavLink, Route};
pub use transport::{HttpResponse, Transport};
pub use view::{load_list, ListState, Liveness, MountGuard};

#[cfg(not(target_arch = "wasm32"))]
pub use transport::ReqwestTransport;
