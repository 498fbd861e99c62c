//! Errors raised while resolving NeuralNote settings.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A layer could not be read or did not match the settings shape.
    #[error("could not load settings: {0}")]
    Figment(#[from] figment::Error),

    /// A value parsed but cannot be used.
    #[error("setting '{field}' is invalid: {reason}")]
    InvalidValue { field: String, reason: String },
}
