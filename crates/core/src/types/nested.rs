//! Arbitrarily nested sequences

use serde_json::Value;

/// A value or a list of further nested values.
#[derive(Debug, Clone, PartialEq)]
pub enum Nested<T> {
    Item(T),
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Wrap a single value
    pub fn item(value: T) -> Self {
        Nested::Item(value)
    }

    /// Build a list from anything that yields nested values
    pub fn list(items: impl IntoIterator<Item = Nested<T>>) -> Self {
        Nested::List(items.into_iter().collect())
    }

    /// Whether this is a list rather than a single value
    pub fn is_list(&self) -> bool {
        matches!(self, Nested::List(_))
    }

    /// Number of nesting levels below this node; a single value has depth 0
    pub fn depth(&self) -> usize {
        match self {
            Nested::Item(_) => 0,
            Nested::List(items) => 1 + items.iter().map(Nested::depth).max().unwrap_or(0),
        }
    }
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(items: Vec<Nested<T>>) -> Self {
        Nested::List(items)
    }
}

/// JSON arrays become lists; every other JSON value is a single item.
impl From<Value> for Nested<Value> {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => Nested::List(items.into_iter().map(Nested::from).collect()),
            other => Nested::Item(other),
        }
    }
}

/// Build a `Vec<Nested<T>>` from bracketed literals.
///
/// Each element must be a single token tree: a literal, an identifier, a
/// parenthesized expression or a bracketed sub-list.
///
/// ```
/// use underbar_core::{nested, Nested};
///
/// let values: Vec<Nested<i32>> = nested![1, [2, [3]], (4 + 1)];
/// assert!(values[1].is_list());
/// ```
#[macro_export]
macro_rules! nested {
    (@elem [$($inner:tt),* $(,)?]) => {
        $crate::types::Nested::List(vec![$($crate::nested!(@elem $inner)),*])
    };
    (@elem $value:tt) => {
        $crate::types::Nested::Item($value)
    };
    ($($elem:tt),* $(,)?) => {
        vec![$($crate::nested!(@elem $elem)),*]
    };
}
