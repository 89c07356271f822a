//! Argument checks that fail fast with `InvalidArgument`.

use super::error::{MvvmError, Result};

const BLANK_STRING_MESSAGE: &str =
    "string parameter cannot be empty and cannot contain only blanks";

/// Reject empty or whitespace-only strings
pub fn ensure_not_blank(value: &str, name: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(MvvmError::invalid_argument(name, BLANK_STRING_MESSAGE));
    }
    Ok(())
}

/// Unwrap a required input or fail with `InvalidArgument`
pub fn require<T>(value: Option<T>, name: &'static str) -> Result<T> {
    value.ok_or_else(|| MvvmError::invalid_argument(name, "value is required"))
}
