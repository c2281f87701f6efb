//! Argument validation for combinator construction

use super::types::{Error, Result};
use tracing::debug;

/// Functional validation utilities
pub struct Validate;

impl Validate {
    /// Validate that a required argument is present, handing it back unchanged
    pub fn not_null<T>(value: Option<T>, parameter: &str) -> Result<T> {
        match value {
            Some(value) => Ok(value),
            None => {
                debug!(parameter = %parameter, "required argument missing");
                Err(Error::invalid_argument(parameter))
            }
        }
    }
}

/// Check that `value` is present, returning it for fluent use
///
/// Fails with [`Error::InvalidArgument`] naming `name` when `value` is `None`.
pub fn check_not_null<T>(name: &str, value: Option<T>) -> Result<T> {
    Validate::not_null(value, name)
}
