//! Request-layer validation helpers.
//!
//! The reflection engine assumes its preconditions hold; callers run these
//! checks first and surface [`CoreError::Validation`] to the user.

use crate::errors::CoreError;

/// Require a non-blank string and return it trimmed.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] with `message` when `value` is missing
/// or contains only whitespace.
pub fn require_content<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str, CoreError> {
    match value.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed),
        _ => Err(CoreError::Validation(message.to_string())),
    }
}
