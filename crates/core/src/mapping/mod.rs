//! Key-value mappings
//!
//! The [`Mapping`] trait is the mapping-side counterpart of a slice: it
//! exposes entries in enumeration order plus keyed lookup and insertion.
//! Mapping operations are separate entry points from the sequence ones
//! rather than a runtime switch on the collection's shape.

pub mod iteration;
pub mod merge;

pub use iteration::{
    contains_value, each_entry, every_value, filter_values, map_values, reduce_values,
    reject_values, some_value,
};
pub use merge::{defaults, defaults_json, extend};

use indexmap::IndexMap;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A key-value collection the mapping primitives can traverse.
pub trait Mapping {
    type Key;
    type Value;

    /// Entries in enumeration order
    fn entries(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)> + '_;

    /// The value stored under `key`, if any
    fn lookup(&self, key: &Self::Key) -> Option<&Self::Value>;

    /// Store `value` under `key`, replacing any previous value
    fn assign(&mut self, key: Self::Key, value: Self::Value);

    /// Number of entries
    fn entry_count(&self) -> usize;

    /// Whether a value is stored under `key`
    fn has_key(&self, key: &Self::Key) -> bool {
        self.lookup(key).is_some()
    }
}

impl<K, V, S> Mapping for IndexMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.iter()
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn assign(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Mapping for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.iter()
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn assign(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl<K: Ord, V> Mapping for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.iter()
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn assign(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}

impl Mapping for serde_json::Map<String, Value> {
    type Key = String;
    type Value = Value;

    fn entries(&self) -> impl Iterator<Item = (&String, &Value)> + '_ {
        self.iter()
    }

    fn lookup(&self, key: &String) -> Option<&Value> {
        self.get(key)
    }

    fn assign(&mut self, key: String, value: Value) {
        self.insert(key, value);
    }

    fn entry_count(&self) -> usize {
        self.len()
    }
}
