//! Error types for note-dashboard.

use note_config::ConfigError;
use thiserror::Error;

/// Errors from history lookups, store mutations and aggregation.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The referenced user, habit or entry does not exist.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Reading, writing or decoding the persisted history failed.
    #[error("Store error: {0}")]
    Store(String),

    /// Caller input was rejected.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Dashboard settings could not be resolved.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl DashboardError {
    pub(crate) fn not_found(entity_type: &'static str, id: &str) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }
}
