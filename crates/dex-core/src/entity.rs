use serde::{Deserialize, Serialize};

use crate::enums::EntityState;
use crate::errors::CoreError;
use crate::name::capitalize_first;

/// One listed item. Summary-only until its details are loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entity {
    pub name: String,
    pub details_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<EntityDetails>,
}

/// Fields fetched from the detail endpoint. Present as a whole or not at all.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntityDetails {
    /// `sprites.front_default`; the remote API returns `null` for some forms.
    pub image_url: Option<String>,
    pub height: u32,
    /// Only populated when weight collection is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    /// Type names in slot order.
    pub types: Vec<String>,
}

impl Entity {
    /// Build a summary-only entity from a raw listing name, normalizing it
    /// for display.
    #[must_use]
    pub fn summary(raw_name: &str, details_url: impl Into<String>) -> Self {
        Self {
            name: capitalize_first(raw_name),
            details_url: details_url.into(),
            details: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> EntityState {
        if self.details.is_some() {
            EntityState::Detailed
        } else {
            EntityState::Summary
        }
    }

    /// Replace all detail fields at once. A second call overwrites the first.
    pub fn apply_details(&mut self, details: EntityDetails) {
        self.details = Some(details);
    }

    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.details.as_ref().and_then(|d| d.image_url.as_deref())
    }

    #[must_use]
    pub fn height(&self) -> Option<u32> {
        self.details.as_ref().map(|d| d.height)
    }

    #[must_use]
    pub fn weight(&self) -> Option<u32> {
        self.details.as_ref().and_then(|d| d.weight)
    }

    #[must_use]
    pub fn types(&self) -> Option<&[String]> {
        self.details.as_ref().map(|d| d.types.as_slice())
    }

    /// Type names joined with `", "`, or `None` while summary-only.
    #[must_use]
    pub fn types_joined(&self) -> Option<String> {
        self.types().map(|types| types.join(", "))
    }

    /// Check the fields a caller-built entity must carry before it is stored.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the details URL is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.details_url.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "entity '{}' has no details url",
                self.name
            )));
        }
        Ok(())
    }
}
