//! Iteration, reduction and predicates over mapping values

use super::Mapping;
use crate::functional::negate;

/// Call `iterator(value, key, mapping)` for every entry in enumeration order.
pub fn each_entry<M, F>(mapping: &M, mut iterator: F)
where
    M: Mapping,
    F: FnMut(&M::Value, &M::Key, &M),
{
    for (key, value) in mapping.entries() {
        iterator(value, key, mapping);
    }
}

/// Left fold over the values of `mapping`.
pub fn reduce_values<M, A, F>(mapping: &M, iterator: F, accumulator: A) -> A
where
    M: Mapping,
    F: FnMut(A, &M::Value) -> A,
{
    mapping.entries().map(|(_, value)| value).fold(accumulator, iterator)
}

/// Whether any value equals `target`. Keys are never compared.
pub fn contains_value<M>(mapping: &M, target: &M::Value) -> bool
where
    M: Mapping,
    M::Value: PartialEq,
{
    reduce_values(mapping, |was_found, value| was_found || value == target, false)
}

/// Apply `iterator(value, key)` to every entry, collecting the results.
pub fn map_values<M, U, F>(mapping: &M, mut iterator: F) -> Vec<U>
where
    M: Mapping,
    F: FnMut(&M::Value, &M::Key) -> U,
{
    let mut results = Vec::with_capacity(mapping.entry_count());

    each_entry(mapping, |value, key, _| {
        results.push(iterator(value, key));
    });

    results
}

/// Values that pass `test`, in enumeration order.
pub fn filter_values<M, F>(mapping: &M, mut test: F) -> Vec<M::Value>
where
    M: Mapping,
    M::Value: Clone,
    F: FnMut(&M::Value) -> bool,
{
    let mut results = Vec::new();

    each_entry(mapping, |value, _, _| {
        if test(value) {
            results.push(value.clone());
        }
    });

    results
}

/// Values that fail `test`, in enumeration order.
pub fn reject_values<M, F>(mapping: &M, test: F) -> Vec<M::Value>
where
    M: Mapping,
    M::Value: Clone,
    F: FnMut(&M::Value) -> bool,
{
    filter_values(mapping, negate(test))
}

/// Whether every value passes `test`. True for an empty mapping.
pub fn every_value<M, F>(mapping: &M, mut test: F) -> bool
where
    M: Mapping,
    F: FnMut(&M::Value) -> bool,
{
    reduce_values(mapping, |is_match, value| is_match && test(value), true)
}

/// Whether at least one value passes `test`. False for an empty mapping.
pub fn some_value<M, F>(mapping: &M, test: F) -> bool
where
    M: Mapping,
    F: FnMut(&M::Value) -> bool,
{
    !every_value(mapping, negate(test))
}
