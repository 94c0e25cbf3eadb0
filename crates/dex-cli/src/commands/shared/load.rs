use dex_client::{EntityHandle, Repository};

use crate::progress::Progress;

/// Run the bulk listing load behind a spinner.
///
/// A failure has already been logged by the repository; the command carries
/// on with whatever the repository holds.
pub async fn load_listing(repository: &Repository) {
    let progress = Progress::spinner("Loading entities...");
    if let Ok(count) = repository.load_all().await {
        tracing::debug!(count, "entities available");
    }
    progress.finish_clear();
}

/// Load one entity's details behind a spinner. On failure the entity stays
/// summary-only.
pub async fn load_entity_details(repository: &Repository, handle: &EntityHandle) {
    let name = handle.read().await.name.clone();
    let progress = Progress::spinner(&format!("Loading {name}..."));
    let _ = repository.load_details(handle).await;
    progress.finish_clear();
}
