//! Search and predicate primitives over ordered sequences

use super::iteration::{each, reduce};
use crate::functional::{negate, Truthy};

/// Index of the first element equal to `target`, or `None` when absent.
pub fn index_of<T: PartialEq>(array: &[T], target: &T) -> Option<usize> {
    let mut result = None;

    each(array, |item, index, _| {
        if result.is_none() && item == target {
            result = Some(index);
        }
    });

    result
}

/// Whether any element equals `target`.
pub fn contains<T: PartialEq>(collection: &[T], target: &T) -> bool {
    reduce(
        collection,
        |was_found, item| was_found || item == target,
        false,
    )
}

/// All elements that pass `test`, in order.
pub fn filter<T, F>(collection: &[T], mut test: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let mut results = Vec::new();

    each(collection, |item, _, _| {
        if test(item) {
            results.push(item.clone());
        }
    });

    results
}

/// All elements that fail `test`, in order. The complement of [`filter`].
pub fn reject<T, F>(collection: &[T], test: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    filter(collection, negate(test))
}

/// Whether every element passes `test`. True for an empty collection.
///
/// Stops calling `test` after the first failure.
pub fn every<T, F>(collection: &[T], mut test: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    reduce(collection, |is_match, item| is_match && test(item), true)
}

/// [`every`] without a predicate: every element is truthy.
pub fn every_truthy<T: Truthy>(collection: &[T]) -> bool {
    every(collection, T::is_truthy)
}

/// Whether at least one element passes `test`. False for an empty collection.
pub fn some<T, F>(collection: &[T], test: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    !every(collection, negate(test))
}

/// [`some`] without a predicate: at least one element is truthy.
pub fn some_truthy<T: Truthy>(collection: &[T]) -> bool {
    some(collection, T::is_truthy)
}

/// Duplicate-free copy of `array`, keeping the first occurrence of each value.
pub fn uniq<T>(array: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let mut results: Vec<T> = Vec::new();

    each(array, |item, _, _| {
        if !contains(&results, item) {
            results.push(item.clone());
        }
    });

    results
}

/// Duplicate-free copy of `array` where two elements are duplicates when
/// `transform` maps them to equal keys.
///
/// With `is_sorted` set, the input must already be ordered by the
/// transformed key: only adjacent keys are compared, in a single pass.
/// Otherwise the first element seen for each distinct key is kept.
pub fn uniq_by<T, K, F>(array: &[T], is_sorted: bool, mut transform: F) -> Vec<T>
where
    T: Clone,
    K: PartialEq,
    F: FnMut(&T) -> K,
{
    let mut results = Vec::new();

    if is_sorted {
        let mut previous: Option<K> = None;
        each(array, |item, _, _| {
            let key = transform(item);
            if previous.as_ref() != Some(&key) {
                results.push(item.clone());
            }
            previous = Some(key);
        });
    } else {
        let mut visited: Vec<K> = Vec::new();
        each(array, |item, _, _| {
            let key = transform(item);
            if !contains(&visited, &key) {
                results.push(item.clone());
                visited.push(key);
            }
        });
    }

    results
}
