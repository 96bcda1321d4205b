//! Cross-cutting error types for Folio.
//!
//! Domain-specific errors (e.g., `ChatError`, `StoreError`) are defined in
//! their respective crates. Everything converges on `anyhow` in `folio-cli`.

use thiserror::Error;

/// Errors that can be raised by any Folio crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A string did not name a known variant of an enum.
    #[error("Unknown {kind}: '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    /// Data failed validation (schema, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
