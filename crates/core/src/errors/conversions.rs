//! Conversion implementations for error types

use super::types::Error;

impl From<anyhow::Error> for Error {
    fn from(error: anyhow::Error) -> Self {
        Error::Composition {
            message: format!("An internal error occurred: {error}"),
        }
    }
}
