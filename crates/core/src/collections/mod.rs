//! Collection primitives over ordered sequences
//!
//! All operations borrow their input as a slice and return freshly
//! allocated results; nothing here mutates the collection it is given.
//!
//! ## Layout
//!
//! - [`iteration`] - `each`, `reduce` and `reduce_first`, the two primitives
//!   everything else is built from
//! - [`search`] - lookups and truth tests (`index_of`, `filter`, `uniq`, ...)
//! - [`transform`] - `map` and `pluck`
//! - [`access`] - `first` / `last` and their counted forms
//! - [`advanced`] - composite operations (`shuffle`, `sort_by`, `zip`, ...)

pub mod access;
pub mod advanced;
pub mod iteration;
pub mod search;
pub mod transform;

pub use access::{first, first_n, last, last_n};
pub use advanced::{
    difference, flatten, intersection, invoke, invoke_method, shuffle, shuffle_with, sort_by,
    sort_by_field, zip,
};
pub use iteration::{each, reduce, reduce_first};
pub use search::{
    contains, every, every_truthy, filter, index_of, reject, some, some_truthy, uniq, uniq_by,
};
pub use transform::{map, pluck};
