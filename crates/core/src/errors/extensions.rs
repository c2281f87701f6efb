//! Extension traits for error handling

use super::types::{Error, Result};
use std::fmt::Display;

/// Extension trait for reporting a computation error through the crate error
///
/// Combinators never do this on their own; it is for callers that want a
/// single error type at the edge of a pipeline.
pub trait ResultExt<T> {
    /// Add context to a Result
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a lazy message
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Display,
{
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Composition {
            message: format!("{}: {}", message.into(), e),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| Error::Composition {
            message: format!("{}: {}", f(), e),
        })
    }
}
