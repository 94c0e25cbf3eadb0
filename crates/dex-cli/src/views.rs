//! Serializable shapes printed by the commands.

use dex_core::{Entity, EntityState};
use serde::Serialize;

/// One row of `dex list` / `dex find`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct EntityRow {
    pub name: String,
    pub details_url: String,
    pub state: EntityState,
}

impl From<&Entity> for EntityRow {
    fn from(entity: &Entity) -> Self {
        Self {
            name: entity.name.clone(),
            details_url: entity.details_url.clone(),
            state: entity.state(),
        }
    }
}

/// The detail card printed by `dex show`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct EntityCard {
    pub name: String,
    pub state: EntityState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<String>,
}

impl From<&Entity> for EntityCard {
    fn from(entity: &Entity) -> Self {
        Self {
            name: entity.name.clone(),
            state: entity.state(),
            image_url: entity.image_url().map(str::to_string),
            height: entity.height(),
            weight: entity.weight(),
            types: entity.types_joined(),
        }
    }
}

/// Printed by `dex find` when nothing matches.
#[derive(Debug, Serialize)]
pub struct NotFound<'a> {
    pub found: bool,
    pub name: &'a str,
}

impl<'a> NotFound<'a> {
    pub const fn new(name: &'a str) -> Self {
        Self { found: false, name }
    }
}
