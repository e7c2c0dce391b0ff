//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownMethod { method, type_name } => {
                write!(f, "no method '{method}' on type '{type_name}'")
            }
            Error::InvalidArgument { operation, message } => {
                write!(f, "invalid argument for '{operation}': {message}")
            }
            Error::Serialization { operation, source } => {
                write!(f, "failed to serialize arguments for '{operation}': {source}")
            }
            Error::NoRuntime { operation } => {
                write!(
                    f,
                    "'{operation}' requires a running tokio runtime, but none was found"
                )
            }
            Error::Configuration { message } => {
                write!(f, "configuration error: {message}")
            }
        }
    }
}
