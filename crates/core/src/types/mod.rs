//! Value types shared by the collection operations
//!
//! - **`nested`**: `Nested<T>`, the input shape of `flatten`, and the
//!   `nested!` literal macro
//! - **`invoke`**: the `Invoke` trait that lets `invoke_method` call methods
//!   by name

pub mod invoke;
pub mod nested;

pub use invoke::Invoke;
pub use nested::Nested;
