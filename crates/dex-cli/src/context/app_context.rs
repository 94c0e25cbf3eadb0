use anyhow::Context;
use dex_client::Repository;
use dex_config::DexConfig;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub repository: Repository,
}

impl AppContext {
    /// Build the repository from configuration. No requests are made yet.
    pub fn init(config: &DexConfig) -> anyhow::Result<Self> {
        let repository =
            Repository::from_config(config).context("failed to initialize dex http client")?;
        Ok(Self { repository })
    }
}
