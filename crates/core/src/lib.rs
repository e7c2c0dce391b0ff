//! Collection primitives, object merging and shared errors for `underbar`.
//!
//! Everything in this crate is built, directly or transitively, on two
//! primitives: iteration ([`each`]) and reduction ([`reduce`]). Operations
//! are eager and never mutate the collections they read.
//!
//! ## Key Components
//!
//! - **`collections`**: Operations over ordered sequences (`&[T]`), from
//!   `each` and `reduce` up to `zip`, `flatten` and `intersection`.
//! - **`mapping`**: The `Mapping` trait and the key-value counterparts of the
//!   sequence operations, plus `extend` and `defaults`.
//! - **`functional`**: `identity`, `negate` and the `Truthy` trait.
//! - **`types`**: `Nested<T>` and the `Invoke` trait used by `invoke_method`.
//! - **`errors`**: The `Error` enum and `Result` alias shared by every
//!   underbar crate.

pub mod collections;
pub mod errors;
pub mod functional;
pub mod mapping;
pub mod types;

#[cfg(test)]
mod testing;

pub use self::{
    collections::*,
    errors::{Error, Result},
    functional::{identity, negate, Truthy},
    mapping::{
        contains_value, defaults, defaults_json, each_entry, every_value, extend, filter_values,
        map_values, reduce_values, reject_values, some_value, Mapping,
    },
    types::{Invoke, Nested},
};
