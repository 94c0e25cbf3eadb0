//! Cross-cutting error types for dex.
//!
//! Domain-specific errors (`ConfigError`, `ClientError`) are defined in their
//! respective crates. The binary converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any dex crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (shape, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
