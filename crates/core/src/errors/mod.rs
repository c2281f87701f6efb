//! Error types, validation helpers and result extensions for fallible

mod builders;
mod conversions;
mod extensions;
mod transformations;
mod types;

pub use extensions::*;
pub use transformations::{check_not_null, Validate};
pub use types::{Error, Result};
