//! Transformations producing a new sequence

use super::iteration::each;
use crate::mapping::Mapping;

/// Apply `iterator` to every element, collecting the results in order.
pub fn map<T, U, F>(collection: &[T], mut iterator: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    let mut results = Vec::with_capacity(collection.len());

    each(collection, |item, _, _| {
        results.push(iterator(item));
    });

    results
}

/// Read `key` out of every mapping in `collection`.
///
/// Elements lacking the key produce `None`.
pub fn pluck<M>(collection: &[M], key: &M::Key) -> Vec<Option<M::Value>>
where
    M: Mapping,
    M::Value: Clone,
{
    map(collection, |item| item.lookup(key).cloned())
}
