//! Cross-cutting error types for NeuralNote.
//!
//! Domain-specific errors (e.g., `EnrichmentError`, `DashboardError`) are
//! defined in their respective crates. A unified error is deferred to
//! `note-cli` where all crate errors converge.

use thiserror::Error;

/// Errors that can be raised by any NeuralNote crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Request data failed validation (missing or empty fields).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
