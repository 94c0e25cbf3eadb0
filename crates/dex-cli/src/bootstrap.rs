use anyhow::Context;
use dex_config::DexConfig;

/// Load `.env` (if any) and the layered configuration.
pub fn load_config() -> anyhow::Result<DexConfig> {
    let config = DexConfig::load_with_dotenv().context("failed to load dex configuration")?;
    tracing::debug!(
        listing_url = %config.api.listing_url(),
        include_weight = config.details.include_weight,
        "configuration loaded"
    );
    Ok(config)
}
