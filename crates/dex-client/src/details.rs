//! Detail endpoint client.

use dex_core::EntityDetails;
use serde::Deserialize;

use crate::{DexClient, error::ClientError, http::get_json};

/// The subset of a detail response dex reads.
#[derive(Debug, Clone, Deserialize)]
pub struct DetailsPayload {
    sprites: Sprites,
    height: u32,
    #[serde(default)]
    weight: Option<u32>,
    types: Vec<TypeSlot>,
}

#[derive(Debug, Clone, Deserialize)]
struct Sprites {
    front_default: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct TypeSlot {
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
struct NamedResource {
    name: String,
}

impl DetailsPayload {
    /// Convert into entity detail fields. `weight` is dropped unless
    /// `include_weight` is set, and required when it is.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingField`] if `include_weight` is set and
    /// the payload has no `weight`.
    pub fn into_details(self, include_weight: bool) -> Result<EntityDetails, ClientError> {
        let weight = if include_weight {
            Some(self.weight.ok_or(ClientError::MissingField("weight"))?)
        } else {
            None
        };
        Ok(EntityDetails {
            image_url: self.sprites.front_default,
            height: self.height,
            weight,
            types: self.types.into_iter().map(|slot| slot.kind.name).collect(),
        })
    }
}

impl DexClient {
    /// Fetch one entity's detail resource.
    ///
    /// `url` is the opaque locator the listing handed out; it is requested
    /// as-is.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the API returns a
    /// non-success status, or the body lacks the expected fields.
    pub async fn fetch_details(&self, url: &str) -> Result<DetailsPayload, ClientError> {
        get_json(&self.http, url).await
    }
}
