//! Core error type definitions

/// Result type alias for underbar operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for underbar operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A method name that the element type does not provide
    UnknownMethod { method: String, type_name: String },

    /// Missing or ill-typed arguments passed to an operation
    InvalidArgument { operation: String, message: String },

    /// Argument lists that could not be turned into a cache key
    Serialization {
        operation: String,
        #[source]
        source: serde_json::Error,
    },

    /// Timer operations attempted outside a Tokio runtime
    NoRuntime { operation: String },

    /// Configuration errors
    Configuration { message: String },
}
