//! # dex-core
//!
//! Core types and error types for dex.
//!
//! This crate provides the foundational types shared across all dex crates:
//! - [`Entity`] and its optional [`EntityDetails`] enrichment
//! - The [`EntityState`] lifecycle enum with its allowed transitions
//! - Display-name normalization ([`capitalize_first`])
//! - Cross-cutting error types

pub mod entity;
pub mod enums;
pub mod errors;
pub mod name;

pub use entity::{Entity, EntityDetails};
pub use enums::EntityState;
pub use errors::CoreError;
pub use name::capitalize_first;
