//! Remote API configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default API root.
fn default_base_url() -> String {
    String::from("https://pokeapi.co/api/v2")
}

/// Default listing page size.
const fn default_page_limit() -> u32 {
    150
}

fn default_user_agent() -> String {
    String::from("dex/0.1")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// API root; the listing lives at `<base_url>/pokemon/`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Page size sent as the `limit` query parameter of the listing request.
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,

    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds. `0` disables the timeout.
    #[serde(default)]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_limit: default_page_limit(),
            user_agent: default_user_agent(),
            timeout_secs: 0,
        }
    }
}

impl ApiConfig {
    /// Full listing URL, e.g. `https://pokeapi.co/api/v2/pokemon/?limit=150`.
    #[must_use]
    pub fn listing_url(&self) -> String {
        format!(
            "{}/pokemon/?limit={}",
            self.base_url.trim_end_matches('/'),
            self.page_limit
        )
    }

    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_secs))
        }
    }

    /// Reject values that cannot produce a usable listing request.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a blank base URL or a zero
    /// page limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.page_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.page_limit".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}
