//! Core error types and argument validation for `fallible`.
//!
//! The combinator crates build on two pieces defined here:
//!
//! - **`errors`**: the crate `Error` enum and `Result` alias. The only failure
//!   this crate raises on its own is `Error::InvalidArgument`, produced when a
//!   checked combinator is handed an absent argument. Errors raised by the
//!   composed functions themselves never pass through this type.
//! - **`check_not_null`** / **`Validate`**: the presence check every checked
//!   combinator runs before it builds anything.
//!
//! With the `testing` feature, [`testing`] exposes spies, fixtures and proptest
//! strategies shared by the workspace's test suites.

pub mod errors;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use self::errors::{check_not_null, Error, Result, ResultExt, Validate};
