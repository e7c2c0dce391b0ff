//! Small function combinators shared by the collection primitives

/// Identity function
///
/// Handy wherever an operation needs an iterator and the caller has none.
pub fn identity<T>(x: T) -> T {
    x
}

/// Negate a predicate
pub fn negate<T, P>(mut predicate: P) -> impl FnMut(&T) -> bool
where
    T: ?Sized,
    P: FnMut(&T) -> bool,
{
    move |value| !predicate(value)
}
