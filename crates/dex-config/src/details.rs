//! Detail enrichment configuration.

use serde::{Deserialize, Serialize};

const fn default_include_weight() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DetailsConfig {
    /// Copy `weight` from the detail response onto the entity.
    #[serde(default = "default_include_weight")]
    pub include_weight: bool,
}

impl Default for DetailsConfig {
    fn default() -> Self {
        Self {
            include_weight: default_include_weight(),
        }
    }
}
