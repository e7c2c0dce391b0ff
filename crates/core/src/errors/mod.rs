//! Error types for underbar operations

mod builders;
mod display;
mod types;

pub use types::{Error, Result};
