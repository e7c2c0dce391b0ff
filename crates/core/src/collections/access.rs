//! Positional access helpers

/// The first element, if any.
pub fn first<T>(array: &[T]) -> Option<&T> {
    array.first()
}

/// The first `n` elements, or the whole slice when `n` exceeds its length.
pub fn first_n<T>(array: &[T], n: usize) -> &[T] {
    &array[..n.min(array.len())]
}

/// The last element, if any.
pub fn last<T>(array: &[T]) -> Option<&T> {
    array.last()
}

/// The last `n` elements, or the whole slice when `n` exceeds its length.
pub fn last_n<T>(array: &[T], n: usize) -> &[T] {
    &array[array.len().saturating_sub(n)..]
}
