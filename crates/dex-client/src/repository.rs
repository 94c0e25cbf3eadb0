//! In-memory entity repository.
//!
//! Entities live in insertion order (listing order for bulk loads). The list
//! itself is append-only; individual entities are enriched in place by
//! [`Repository::load_details`]. Each entity sits behind its own lock so a
//! handle obtained from [`Repository::get_all`] or [`Repository::find`] sees
//! later enrichment.
//!
//! Both network operations log failures and hand the error back; neither
//! panics, and a failure never leaves partial state behind.

use std::sync::Arc;

use dex_config::DexConfig;
use dex_core::{CoreError, Entity};
use tokio::sync::RwLock;

use crate::{DexClient, error::ClientError};

/// Shared, lockable reference to one stored entity.
pub type EntityHandle = Arc<RwLock<Entity>>;

/// Ordered store of entities plus the client that fills it.
///
/// Cloning is cheap and every clone shares the same store.
#[derive(Debug, Clone)]
pub struct Repository {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    client: DexClient,
    include_weight: bool,
    entities: RwLock<Vec<EntityHandle>>,
}

impl Repository {
    /// Create an empty repository.
    #[must_use]
    pub fn new(client: DexClient, include_weight: bool) -> Self {
        Self {
            inner: Arc::new(Inner {
                client,
                include_weight,
                entities: RwLock::new(Vec::new()),
            }),
        }
    }

    /// Create an empty repository wired to the configured API.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &DexConfig) -> Result<Self, ClientError> {
        let client = DexClient::new(&config.api)?;
        Ok(Self::new(client, config.details.include_weight))
    }

    /// Fetch the listing and append one summary entity per entry, in
    /// response order. Returns how many were appended.
    ///
    /// Not idempotent: calling it again appends the listing a second time.
    ///
    /// # Errors
    ///
    /// Returns the [`ClientError`] from the listing request. It has already
    /// been logged, and nothing was appended.
    pub async fn load_all(&self) -> Result<usize, ClientError> {
        let entries = match self.inner.client.fetch_listing().await {
            Ok(entries) => entries,
            Err(error) => {
                tracing::warn!(%error, url = self.inner.client.listing_url(), "listing load failed");
                return Err(error);
            }
        };

        let loaded: Vec<EntityHandle> = entries
            .into_iter()
            .map(|entry| Arc::new(RwLock::new(Entity::summary(&entry.name, entry.url))))
            .collect();
        let count = loaded.len();

        self.inner.entities.write().await.extend(loaded);
        tracing::debug!(count, "listing loaded");
        Ok(count)
    }

    /// Append a caller-built entity.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the entity has no details URL.
    pub async fn push(&self, entity: Entity) -> Result<EntityHandle, CoreError> {
        entity.validate()?;
        let handle = Arc::new(RwLock::new(entity));
        self.inner.entities.write().await.push(Arc::clone(&handle));
        Ok(handle)
    }

    /// Every stored entity, in insertion order.
    ///
    /// The handles are shared with the repository, so later enrichment is
    /// visible through them. The list itself is a copy taken now: entities
    /// appended afterwards do not show up in it.
    pub async fn get_all(&self) -> Vec<EntityHandle> {
        self.inner.entities.read().await.clone()
    }

    /// Entities whose name equals `name` exactly (case-sensitive), in
    /// insertion order. `None` when nothing matches.
    pub async fn find(&self, name: &str) -> Option<Vec<EntityHandle>> {
        let entities = self.get_all().await;
        let mut matches = Vec::new();
        for handle in entities {
            if handle.read().await.name == name {
                matches.push(handle);
            }
        }
        (!matches.is_empty()).then_some(matches)
    }

    /// Fetch the entity's detail resource and set all detail fields at once.
    ///
    /// No deduplication: two calls for the same entity issue two requests,
    /// and the later success overwrites the earlier one.
    ///
    /// # Errors
    ///
    /// Returns the [`ClientError`] from the detail request. It has already
    /// been logged, and the entity is left exactly as it was.
    pub async fn load_details(&self, handle: &EntityHandle) -> Result<(), ClientError> {
        let (name, url) = {
            let entity = handle.read().await;
            (entity.name.clone(), entity.details_url.clone())
        };

        let details = match self
            .inner
            .client
            .fetch_details(&url)
            .await
            .and_then(|payload| payload.into_details(self.inner.include_weight))
        {
            Ok(details) => details,
            Err(error) => {
                tracing::warn!(%error, name = %name, url = %url, "detail load failed");
                return Err(error);
            }
        };

        handle.write().await.apply_details(details);
        tracing::debug!(name = %name, "details loaded");
        Ok(())
    }

    /// Cloned copies of every entity, for rendering.
    pub async fn snapshot(&self) -> Vec<Entity> {
        let entities = self.inner.entities.read().await;
        let mut out = Vec::with_capacity(entities.len());
        for handle in entities.iter() {
            out.push(handle.read().await.clone());
        }
        out
    }

    pub async fn len(&self) -> usize {
        self.inner.entities.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.entities.read().await.is_empty()
    }
}
