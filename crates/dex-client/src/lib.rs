//! # dex-client
//!
//! HTTP client and in-memory entity repository for dex.
//!
//! Two remote calls back everything:
//! - the listing endpoint (`<base>/pokemon/?limit=N`), fetched once in bulk
//! - the per-entity detail endpoint, fetched on demand
//!
//! [`DexClient`] issues those requests; [`Repository`] owns the ordered
//! collection of entities built from them and enriches entries in place.

pub mod details;
pub mod listing;
pub mod repository;

mod error;
mod http;

pub use details::DetailsPayload;
pub use error::ClientError;
pub use listing::ListingEntry;
pub use repository::{EntityHandle, Repository};

use dex_config::ApiConfig;

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the listing and detail endpoints.
#[derive(Debug, Clone)]
pub struct DexClient {
    http: reqwest::Client,
    listing_url: String,
}

impl DexClient {
    /// Build a client from API settings (user agent, optional timeout).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_http(builder.build()?, config))
    }

    /// Wrap an already-configured `reqwest::Client`.
    #[must_use]
    pub fn with_http(http: reqwest::Client, config: &ApiConfig) -> Self {
        Self {
            http,
            listing_url: config.listing_url(),
        }
    }

    /// The URL [`Self::fetch_listing`] requests.
    #[must_use]
    pub fn listing_url(&self) -> &str {
        &self.listing_url
    }
}
