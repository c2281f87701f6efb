//! Core error type definitions

/// Result type alias for fallible operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for fallible operations using thiserror
///
/// This type never carries the caller's computation error. Errors raised by a
/// composed function pass through every combinator as the caller's own `E`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A required combinator argument was absent
    #[error("invalid argument: parameter '{parameter}' must not be null")]
    InvalidArgument { parameter: String },

    /// A composition step failed and the caller asked for it to be reported
    /// through the crate error
    #[error("composition error: {message}")]
    Composition { message: String },
}
