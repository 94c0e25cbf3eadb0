//! Listing endpoint client.

use serde::Deserialize;

use crate::{DexClient, error::ClientError, http::get_json};

#[derive(Deserialize)]
struct ListingResponse {
    results: Vec<ListingEntry>,
}

/// One `{ name, url }` pair from the listing response, as sent by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListingEntry {
    pub name: String,
    pub url: String,
}

impl DexClient {
    /// Fetch the configured page of entity summaries, in response order.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API returns a
    /// non-success status, or the body is not a listing.
    pub async fn fetch_listing(&self) -> Result<Vec<ListingEntry>, ClientError> {
        let data: ListingResponse = get_json(&self.http, &self.listing_url).await?;
        Ok(data.results)
    }
}
