//! Composite collection operations built on the primitives

use super::iteration::{each, reduce};
use super::search::{contains, every, filter, reject, uniq};
use super::transform::map;
use crate::errors::Result;
use crate::mapping::Mapping;
use crate::types::{Invoke, Nested};
use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::Value;
use std::cmp::Ordering;

/// A uniformly random permutation of `array`, leaving the input untouched.
pub fn shuffle<T: Clone>(array: &[T]) -> Vec<T> {
    shuffle_with(array, &mut rand::thread_rng())
}

/// [`shuffle`] driven by a caller-supplied random number generator.
pub fn shuffle_with<T, R>(array: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut shuffled = array.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Call `function` on every element and collect the results.
pub fn invoke<T, R, F>(collection: &[T], function: F) -> Vec<R>
where
    F: FnMut(&T) -> R,
{
    map(collection, function)
}

/// Call the method named `method` on every element.
///
/// The first element that rejects the call aborts the whole operation.
pub fn invoke_method<T: Invoke>(
    collection: &[T],
    method: &str,
    args: &[Value],
) -> Result<Vec<T::Output>> {
    collection
        .iter()
        .map(|item| item.invoke(method, args))
        .collect()
}

/// Three-way comparison for sort keys. Keys that are not comparable with
/// themselves (`NaN`) order after every other key.
fn compare_keys<K: PartialOrd>(a: &K, b: &K) -> Ordering {
    a.partial_cmp(b).unwrap_or_else(|| {
        let a_comparable = a.partial_cmp(a).is_some();
        let b_comparable = b.partial_cmp(b).is_some();
        b_comparable.cmp(&a_comparable)
    })
}

/// A new vector ordered by the key `criterion` extracts from each element.
///
/// The sort is stable and the input is left untouched.
pub fn sort_by<T, K, F>(collection: &[T], mut criterion: F) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    let mut keyed = map(collection, |item| (criterion(item), item.clone()));
    keyed.sort_by(|(a, _), (b, _)| compare_keys(a, b));
    keyed.into_iter().map(|(_, item)| item).collect()
}

/// A new vector of mappings ordered by the value stored under `key`.
///
/// Elements lacking the key come last, in their original order.
pub fn sort_by_field<M>(collection: &[M], key: &M::Key) -> Vec<M>
where
    M: Mapping + Clone,
    M::Value: PartialOrd,
{
    let mut sorted = collection.to_vec();
    sorted.sort_by(|a, b| match (a.lookup(key), b.lookup(key)) {
        (Some(x), Some(y)) => compare_keys(x, y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    sorted
}

/// Group elements sharing an index into one row per index.
///
/// There are as many rows as the longest input has elements; shorter inputs
/// contribute `None` past their end.
pub fn zip<T: Clone>(arrays: &[&[T]]) -> Vec<Vec<Option<T>>> {
    let longest = reduce(arrays, |length, array| length.max(array.len()), 0usize);

    (0..longest)
        .map(|index| map(arrays, |array| array.get(index).cloned()))
        .collect()
}

/// Flatten arbitrarily nested lists depth-first, left to right.
pub fn flatten<T: Clone>(nested: &[Nested<T>]) -> Vec<T> {
    fn walk<T: Clone>(items: &[Nested<T>], flat: &mut Vec<T>) {
        each(items, |item, _, _| match item {
            Nested::Item(value) => flat.push(value.clone()),
            Nested::List(list) => walk(list, flat),
        });
    }

    let mut flat = Vec::new();
    walk(nested, &mut flat);
    flat
}

/// Values present in every input, each once, in order of first appearance
/// across the inputs.
pub fn intersection<T>(arrays: &[&[T]]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let all_items = uniq(&arrays.concat());

    filter(&all_items, |item| {
        every(arrays, |array| contains(array, item))
    })
}

/// Elements of `array` that appear in none of `others`, in original order.
pub fn difference<T>(array: &[T], others: &[&[T]]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let excluded = others.concat();
    reject(array, |item| contains(&excluded, item))
}
