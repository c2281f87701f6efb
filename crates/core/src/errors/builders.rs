//! Builder methods for creating errors with context

use super::types::Error;

impl Error {
    /// Create an invalid argument error naming the offending parameter
    #[must_use]
    pub fn invalid_argument(parameter: impl Into<String>) -> Self {
        Error::InvalidArgument {
            parameter: parameter.into(),
        }
    }

    /// Create a composition error
    #[must_use]
    pub fn composition(message: impl Into<String>) -> Self {
        Error::Composition {
            message: message.into(),
        }
    }

    /// Name of the parameter an invalid argument error refers to
    #[must_use]
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Error::InvalidArgument { parameter } => Some(parameter.as_str()),
            Error::Composition { .. } => None,
        }
    }

    /// Whether this error reports an absent combinator argument
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }
}
