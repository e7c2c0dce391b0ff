//! Builder methods for creating errors with context

use super::types::Error;

// Helper methods for creating errors with context
impl Error {
    /// Create an unknown method error
    #[must_use]
    pub fn unknown_method(method: impl Into<String>, type_name: impl Into<String>) -> Self {
        Error::UnknownMethod {
            method: method.into(),
            type_name: type_name.into(),
        }
    }

    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create a serialization error
    #[must_use]
    pub fn serialization(operation: impl Into<String>, source: serde_json::Error) -> Self {
        Error::Serialization {
            operation: operation.into(),
            source,
        }
    }

    /// Create a missing runtime error
    #[must_use]
    pub fn no_runtime(operation: impl Into<String>) -> Self {
        Error::NoRuntime {
            operation: operation.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }
}
