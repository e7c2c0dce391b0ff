//! Iteration and reduction over ordered sequences
//!
//! Every other sequence operation in this crate is built, directly or
//! transitively, on [`each`] and [`reduce`].

/// Call `iterator(value, index, collection)` for every element in ascending
/// index order.
pub fn each<T, F>(collection: &[T], mut iterator: F)
where
    F: FnMut(&T, usize, &[T]),
{
    for (index, value) in collection.iter().enumerate() {
        iterator(value, index, collection);
    }
}

/// Left fold starting from an explicit seed.
///
/// The iterator sees the accumulator and each element in index order,
/// starting with the first element.
pub fn reduce<T, A, F>(collection: &[T], iterator: F, accumulator: A) -> A
where
    F: FnMut(A, &T) -> A,
{
    collection.iter().fold(accumulator, iterator)
}

/// Left fold seeded with the first element.
///
/// Folding starts at the second element, so a single element is returned
/// as-is without calling `iterator`. Returns `None` for an empty input.
pub fn reduce_first<T, F>(collection: &[T], iterator: F) -> Option<T>
where
    T: Clone,
    F: FnMut(T, &T) -> T,
{
    let (first, rest) = collection.split_first()?;
    Some(reduce(rest, iterator, first.clone()))
}
