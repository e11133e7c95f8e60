//! Required-field checks for request bodies.
//!
//! Request DTOs deserialize every field as `Option` so that a missing field
//! yields a 400 with a readable message instead of a framework rejection.

use crate::error::CoreError;

/// Unwrap a required field, failing with a validation error naming it.
pub fn require<T>(value: Option<T>, field: &str) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::Validation(format!("{field} is required")))
}

/// Unwrap a required text field. Empty or whitespace-only strings count as
/// missing.
pub fn require_text(value: Option<String>, field: &str) -> Result<String, CoreError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(CoreError::Validation(format!("{field} is required"))),
    }
}
